use tracing::{debug, warn};

use super::AssignmentStore;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;

pub async fn add_assignment(store: &AssignmentStore, assignment: Assignment) {
    let _guard = store.lock_writer().await;

    let mut next = store.snapshot().to_vec();
    // ID 由调用方保证唯一，这里只做提示
    if next.iter().any(|a| a.id == assignment.id) {
        warn!("Assignment id {} already exists in the store", assignment.id);
    }

    debug!(
        "Adding assignment {} ({}) created by {}",
        assignment.id, assignment.title, assignment.created_by
    );
    next.push(assignment);
    store.publish(next);
}

pub async fn create_assignment(
    store: &AssignmentStore,
    created_by: &str,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let assignment = req.into_assignment(created_by)?;
    add_assignment(store, assignment.clone()).await;
    Ok(assignment)
}
