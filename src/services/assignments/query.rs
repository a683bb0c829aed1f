use super::{AssignmentStore, views};
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::AssignmentViewQuery;
use crate::models::assignments::responses::{PendingReview, StudentAssignment, UserRole};

pub fn get_assignment(store: &AssignmentStore, assignment_id: &str) -> Option<Assignment> {
    store
        .snapshot()
        .iter()
        .find(|a| a.id == assignment_id)
        .cloned()
}

/// 用同一时刻把快照划分为（进行中, 已截止），两者不重叠且覆盖全部作业
pub fn partition_by_deadline(store: &AssignmentStore) -> (Vec<Assignment>, Vec<Assignment>) {
    let now = store.clock().now();
    store
        .snapshot()
        .iter()
        .cloned()
        .partition(|a| !a.is_deadline_passed(&now))
}

pub fn assignments_for_student(
    store: &AssignmentStore,
    student_id: &str,
) -> Vec<(Assignment, bool)> {
    store
        .snapshot()
        .iter()
        .map(|a| (a.clone(), a.has_student_submitted(student_id)))
        .collect()
}

pub fn pending_reviews(store: &AssignmentStore) -> Vec<PendingReview> {
    views::pending_reviews(&store.snapshot())
}

pub fn view(
    store: &AssignmentStore,
    role: UserRole,
    viewer_id: &str,
    query: &AssignmentViewQuery,
) -> Vec<StudentAssignment> {
    let now = store.clock().now();
    let rows = views::project(&store.snapshot(), role, viewer_id, &now);
    views::apply_query(rows, query)
}

/// 以 JSON 导出当前快照
pub fn export_json(store: &AssignmentStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&*store.snapshot())?)
}
