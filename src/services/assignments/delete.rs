use std::path::Path;
use tracing::{debug, warn};

use super::AssignmentStore;

/// 删除作业及其附件、全部提交文件
///
/// 作业从快照中整体移除；文件删除失败只记录日志。
pub async fn delete_assignment(store: &AssignmentStore, assignment_id: &str) -> bool {
    let _guard = store.lock_writer().await;

    let mut next = store.snapshot().to_vec();
    let Some(index) = next.iter().position(|a| a.id == assignment_id) else {
        debug!("Delete skipped, assignment {} not found", assignment_id);
        return false;
    };

    let removed = next.remove(index);
    store.publish(next);

    let files = removed
        .attached_file
        .iter()
        .chain(removed.submissions.values().map(|s| &s.file_path));

    for file in files {
        if let Err(e) = store.storage().remove_file(Path::new(file)).await {
            warn!(
                "Failed to remove file {} of deleted assignment {}: {}",
                file, assignment_id, e
            );
        }
    }

    debug!(
        "Deleted assignment {} with {} submission(s)",
        assignment_id,
        removed.submissions.len()
    );
    true
}
