use std::path::Path;
use tracing::{debug, warn};

use super::AssignmentStore;
use crate::errors::{AssignmentStoreError, Result};
use crate::models::assignments::entities::Submission;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::utils::validate::sanitize_file_name;

/// 学生提交作业
///
/// 以下情况返回错误且快照不变：
/// - 作业不存在（`NotFound`）
/// - 已过截止时间（`DeadlinePassed`）
/// - 文件名非法（`Validation`）
/// - 文件复制失败（`FileOperation`）
///
/// 同一学生再次提交会替换之前的提交，旧文件随之删除。
pub async fn submit_assignment(
    store: &AssignmentStore,
    req: SubmitAssignmentRequest,
) -> Result<Submission> {
    let _guard = store.lock_writer().await;

    let mut next = store.snapshot().to_vec();
    let Some(index) = next.iter().position(|a| a.id == req.assignment_id) else {
        warn!(
            "Submission rejected, assignment {} not found",
            req.assignment_id
        );
        return Err(AssignmentStoreError::not_found(format!(
            "Assignment {} not found",
            req.assignment_id
        )));
    };

    let now = store.clock().now();
    if next[index].is_deadline_passed(&now) {
        warn!(
            "Submission by {} rejected, deadline of {} has passed",
            req.student_id, req.assignment_id
        );
        return Err(AssignmentStoreError::deadline_passed(format!(
            "Deadline of assignment {} has passed",
            req.assignment_id
        )));
    }

    let settings = store.settings();
    let file_name = sanitize_file_name(
        req.file_name.as_deref().unwrap_or_default(),
        &settings.default_file_name,
        settings.max_file_name_length,
    )
    .map_err(AssignmentStoreError::validation)?;

    let stored = store
        .storage()
        .store_submission_file(Path::new(&req.source_path), &file_name)
        .await?;

    let submission = Submission {
        student_id: req.student_id.clone(),
        student_name: req.student_name,
        file_path: stored.to_string_lossy().into_owned(),
        submitted_at: now,
        file_name,
        grade: None,
        feedback: None,
    };

    let previous = next[index]
        .submissions
        .insert(req.student_id.clone(), submission.clone());
    store.publish(next);

    if let Some(previous) = previous {
        debug!(
            "Student {} resubmitted {}, replacing previous submission",
            req.student_id, req.assignment_id
        );
        if let Err(e) = store
            .storage()
            .remove_file(Path::new(&previous.file_path))
            .await
        {
            warn!(
                "Failed to remove replaced submission file {}: {}",
                previous.file_path, e
            );
        }
    }

    debug!(
        "Student {} submitted {} as {}",
        req.student_id, req.assignment_id, submission.file_path
    );
    Ok(submission)
}
