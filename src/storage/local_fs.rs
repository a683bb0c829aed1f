//! 本地文件系统存储
//!
//! 作业附件和学生提交分别保存在两个私有目录中，
//! 每个副本以 `{uuid}_{文件名}` 命名，同名文件不会互相覆盖。

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::{FileArea, FileStorage};
use crate::errors::{AssignmentStoreError, Result};

/// 磁盘文件名的字节上限
pub const MAX_STORED_NAME_BYTES: usize = 255;
/// `{uuid}_` 前缀的字节数
pub const STORED_NAME_PREFIX_BYTES: usize = 37;

#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    assignment_dir: PathBuf,
    submission_dir: PathBuf,
}

impl LocalFileStorage {
    /// 创建目录（如不存在）并解析为绝对路径
    pub async fn open(
        assignment_dir: impl AsRef<Path>,
        submission_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let assignment_dir = Self::prepare_dir(assignment_dir.as_ref()).await?;
        let submission_dir = Self::prepare_dir(submission_dir.as_ref()).await?;

        info!(
            "Local file storage ready: assignments={}, submissions={}",
            assignment_dir.display(),
            submission_dir.display()
        );

        Ok(Self {
            assignment_dir,
            submission_dir,
        })
    }

    async fn prepare_dir(dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).await.map_err(|e| {
            AssignmentStoreError::storage_init(format!(
                "Failed to create directory {}: {e}",
                dir.display()
            ))
        })?;
        fs::canonicalize(dir).await.map_err(|e| {
            AssignmentStoreError::storage_init(format!(
                "Failed to resolve directory {}: {e}",
                dir.display()
            ))
        })
    }

    fn is_managed(&self, path: &Path) -> bool {
        // `..` 和 `.` 不参与前缀比较，直接视为非受管
        let plain = path.components().all(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::Normal(_)
            )
        });
        plain
            && (path.starts_with(&self.assignment_dir) || path.starts_with(&self.submission_dir))
    }

    fn unique_name(file_name: &str) -> String {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file");
        let base = truncate_to_bytes(base, MAX_STORED_NAME_BYTES - STORED_NAME_PREFIX_BYTES);
        format!("{}_{}", Uuid::new_v4(), base)
    }
}

/// 按字节截断，不拆分多字节字符
fn truncate_to_bytes(name: &str, max_bytes: usize) -> &str {
    if name.len() <= max_bytes {
        return name;
    }
    let mut end = max_bytes;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

#[async_trait::async_trait]
impl FileStorage for LocalFileStorage {
    fn area_dir(&self, area: FileArea) -> &Path {
        match area {
            FileArea::Assignments => &self.assignment_dir,
            FileArea::Submissions => &self.submission_dir,
        }
    }

    async fn store_file(&self, area: FileArea, source: &Path, file_name: &str) -> Result<PathBuf> {
        let dest = self.area_dir(area).join(Self::unique_name(file_name));

        if let Err(e) = fs::copy(source, &dest).await {
            error!(
                "Failed to copy {} to {}: {}",
                source.display(),
                dest.display(),
                e
            );
            // 清理可能残留的半成品
            let _ = fs::remove_file(&dest).await;
            return Err(AssignmentStoreError::file_operation(format!(
                "Failed to copy {}: {e}",
                source.display()
            )));
        }

        debug!("Stored {:?} file at {}", area, dest.display());
        Ok(dest)
    }

    async fn remove_file(&self, path: &Path) -> Result<bool> {
        if !self.is_managed(path) {
            warn!("Refusing to remove unmanaged file: {}", path.display());
            return Ok(false);
        }

        match fs::remove_file(path).await {
            Ok(()) => {
                debug!("Removed file {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn file_exists(&self, path: &Path) -> bool {
        fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
