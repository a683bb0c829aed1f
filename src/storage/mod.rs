use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;

pub mod local_fs;

pub use local_fs::LocalFileStorage;

/// 私有文件区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileArea {
    /// 作业附件
    Assignments,
    /// 学生提交
    Submissions,
}

#[async_trait::async_trait]
pub trait FileStorage: Send + Sync {
    /// 区域目录（绝对路径）
    fn area_dir(&self, area: FileArea) -> &Path;

    /// 复制源文件到区域目录，使用唯一文件名，返回副本的绝对路径
    async fn store_file(&self, area: FileArea, source: &Path, file_name: &str) -> Result<PathBuf>;

    /// 删除受管文件；文件不存在或不在受管目录中时返回 false
    async fn remove_file(&self, path: &Path) -> Result<bool>;

    /// 文件是否存在
    async fn file_exists(&self, path: &Path) -> bool;

    async fn store_assignment_file(&self, source: &Path, file_name: &str) -> Result<PathBuf> {
        self.store_file(FileArea::Assignments, source, file_name).await
    }

    async fn store_submission_file(&self, source: &Path, file_name: &str) -> Result<PathBuf> {
        self.store_file(FileArea::Submissions, source, file_name).await
    }
}

/// 按配置创建本地文件存储，并确保两个私有目录存在
pub async fn create_file_storage(config: &AppConfig) -> Result<Arc<dyn FileStorage>> {
    let storage = LocalFileStorage::open(config.assignment_dir(), config.submission_dir()).await?;
    Ok(Arc::new(storage))
}
