use std::sync::Arc;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::{AssignmentStoreError, Result};
use crate::services::assignments::AssignmentStore;
use crate::storage::{FileArea, FileStorage, create_file_storage};
use crate::utils::clock::{Clock, SystemClock};

pub struct StartupContext {
    pub storage: Arc<dyn FileStorage>,
    pub clock: Arc<dyn Clock>,
    pub store: Arc<AssignmentStore>,
}

/// 准备存储运行所需的上下文
/// 包括私有文件目录、系统时钟和作业存储
pub async fn prepare_store_startup(config: &AppConfig) -> Result<StartupContext> {
    let started = chrono::Utc::now();

    info!(
        "Starting {} ({} v{}) in {} mode",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    // 附件与提交必须位于不同目录
    if config.assignment_dir() == config.submission_dir() {
        return Err(AssignmentStoreError::configuration(format!(
            "Assignment and submission directories must differ: {}",
            config.assignment_dir().display()
        )));
    }

    let storage = create_file_storage(config).await?;
    info!(
        "File storage initialized: assignments at {}, submissions at {}",
        storage.area_dir(FileArea::Assignments).display(),
        storage.area_dir(FileArea::Submissions).display()
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = Arc::new(AssignmentStore::new(
        storage.clone(),
        clock.clone(),
        config.submission.clone(),
    ));

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(started)
            .num_milliseconds()
    );

    Ok(StartupContext {
        storage,
        clock,
        store,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_startup_creates_private_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = AppConfig::load().unwrap();
        config.storage.root_dir = tmp.path().join("store").to_string_lossy().into_owned();

        let ctx = prepare_store_startup(&config).await.unwrap();

        assert!(config.assignment_dir().is_dir());
        assert!(config.submission_dir().is_dir());
        assert!(ctx.store.snapshot().is_empty());
        assert!(ctx.storage.area_dir(FileArea::Submissions).is_absolute());
    }

    #[tokio::test]
    async fn test_startup_rejects_shared_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = AppConfig::load().unwrap();
        config.storage.root_dir = tmp.path().to_string_lossy().into_owned();
        config.storage.submissions_dir = config.storage.assignments_dir.clone();

        let err = prepare_store_startup(&config).await.err().unwrap();
        assert_eq!(err.code(), "E005");
    }
}
