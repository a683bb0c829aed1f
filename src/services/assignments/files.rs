use std::path::{Path, PathBuf};
use tracing::debug;

use super::AssignmentStore;
use crate::errors::{AssignmentStoreError, Result};
use crate::utils::validate::sanitize_file_name;

/// 上传作业附件，返回私有副本的绝对路径
pub async fn upload_assignment_file(
    store: &AssignmentStore,
    source: &Path,
    file_name: &str,
) -> Result<String> {
    let settings = store.settings();
    let file_name = sanitize_file_name(
        file_name,
        &settings.default_file_name,
        settings.max_file_name_length,
    )
    .map_err(AssignmentStoreError::validation)?;

    let stored = store
        .storage()
        .store_assignment_file(source, &file_name)
        .await?;
    Ok(stored.to_string_lossy().into_owned())
}

/// 作业附件，文件已不存在时返回 `None`
pub async fn assignment_file(store: &AssignmentStore, assignment_id: &str) -> Option<PathBuf> {
    let path = store
        .snapshot()
        .iter()
        .find(|a| a.id == assignment_id)
        .and_then(|a| a.attached_file.clone())
        .map(PathBuf::from)?;

    existing(store, path).await
}

/// 学生提交文件，文件已不存在时返回 `None`
pub async fn submission_file(
    store: &AssignmentStore,
    assignment_id: &str,
    student_id: &str,
) -> Option<PathBuf> {
    let path = store
        .snapshot()
        .iter()
        .find(|a| a.id == assignment_id)
        .and_then(|a| a.submissions.get(student_id))
        .map(|s| PathBuf::from(&s.file_path))?;

    existing(store, path).await
}

async fn existing(store: &AssignmentStore, path: PathBuf) -> Option<PathBuf> {
    if store.storage().file_exists(&path).await {
        Some(path)
    } else {
        debug!("Referenced file is missing on disk: {}", path.display());
        None
    }
}
