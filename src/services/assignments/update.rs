use std::path::Path;
use tracing::{debug, warn};

use super::AssignmentStore;
use crate::models::assignments::entities::Assignment;

/// 按 ID 替换作业
///
/// 始终保留原有提交，传入实体中的 `submissions` 会被忽略。
/// 找不到作业时返回 `None`，快照不变。
pub async fn update_assignment(
    store: &AssignmentStore,
    mut assignment: Assignment,
) -> Option<Assignment> {
    let _guard = store.lock_writer().await;

    let mut next = store.snapshot().to_vec();
    let Some(index) = next.iter().position(|a| a.id == assignment.id) else {
        debug!("Update skipped, assignment {} not found", assignment.id);
        return None;
    };

    let previous = &next[index];
    assignment.submissions = previous.submissions.clone();
    let old_file = previous.attached_file.clone();
    next[index] = assignment.clone();
    store.publish(next);

    // 附件被替换后，旧副本不再被引用
    if let Some(old_file) = old_file
        && assignment.attached_file.as_deref() != Some(old_file.as_str())
        && let Err(e) = store.storage().remove_file(Path::new(&old_file)).await
    {
        warn!("Failed to remove replaced attachment {}: {}", old_file, e);
    }

    debug!("Updated assignment {}", assignment.id);
    Some(assignment)
}
