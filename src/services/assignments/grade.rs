use tracing::debug;

use super::AssignmentStore;
use crate::models::assignments::entities::Submission;
use crate::models::assignments::requests::GradeSubmissionRequest;

/// 为已有提交评分
///
/// 作业或该学生的提交不存在时返回 `None`，不会新建提交。
pub async fn grade_submission(
    store: &AssignmentStore,
    req: GradeSubmissionRequest,
) -> Option<Submission> {
    let _guard = store.lock_writer().await;

    let mut next = store.snapshot().to_vec();
    let Some(submission) = next
        .iter_mut()
        .find(|a| a.id == req.assignment_id)
        .and_then(|a| a.submissions.get_mut(&req.student_id))
    else {
        debug!(
            "Grading skipped, no submission by {} for {}",
            req.student_id, req.assignment_id
        );
        return None;
    };

    submission.grade = Some(req.grade);
    submission.feedback = Some(req.feedback);
    let graded = submission.clone();
    store.publish(next);

    debug!(
        "Graded submission of {} for {}",
        req.student_id, req.assignment_id
    );
    Some(graded)
}
