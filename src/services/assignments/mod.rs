//! 作业与提交的共享存储
//!
//! 所有作业保存在一个不可变快照（`Arc<Vec<Assignment>>`）中，
//! 每次变更都会整体替换快照并通过 `watch` 通道发布给订阅者。
//! 变更操作由一把写锁串行化，读操作只读取当前快照，不会看到半更新状态。

pub mod create;
pub mod delete;
pub mod files;
pub mod grade;
pub mod query;
pub mod submit;
pub mod update;
pub mod views;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, watch};

use crate::config::SubmissionConfig;
use crate::errors::Result;
use crate::models::assignments::entities::{Assignment, Submission};
use crate::models::assignments::requests::{
    AssignmentViewQuery, CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest,
};
use crate::models::assignments::responses::{PendingReview, StudentAssignment, UserRole};
use crate::storage::FileStorage;
use crate::utils::clock::Clock;

/// 作业列表快照
pub type Snapshot = Arc<Vec<Assignment>>;

pub struct AssignmentStore {
    storage: Arc<dyn FileStorage>,
    clock: Arc<dyn Clock>,
    settings: SubmissionConfig,
    state: watch::Sender<Snapshot>,
    writer: Mutex<()>,
}

impl AssignmentStore {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        clock: Arc<dyn Clock>,
        settings: SubmissionConfig,
    ) -> Self {
        let (state, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            storage,
            clock,
            settings,
            state,
            writer: Mutex::new(()),
        }
    }

    /// 订阅快照变更
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    /// 当前快照
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    pub(crate) async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    /// 发布新快照，调用方必须持有写锁
    pub(crate) fn publish(&self, next: Vec<Assignment>) {
        self.state.send_replace(Arc::new(next));
    }

    pub(crate) fn storage(&self) -> &Arc<dyn FileStorage> {
        &self.storage
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub(crate) fn settings(&self) -> &SubmissionConfig {
        &self.settings
    }

    // ---- 变更操作 ----

    pub async fn add(&self, assignment: Assignment) {
        create::add_assignment(self, assignment).await
    }

    pub async fn create(
        &self,
        created_by: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, created_by, req).await
    }

    pub async fn update(&self, assignment: Assignment) -> Option<Assignment> {
        update::update_assignment(self, assignment).await
    }

    pub async fn delete(&self, assignment_id: &str) -> bool {
        delete::delete_assignment(self, assignment_id).await
    }

    pub async fn submit(&self, req: SubmitAssignmentRequest) -> Result<Submission> {
        submit::submit_assignment(self, req).await
    }

    pub async fn grade_submission(&self, req: GradeSubmissionRequest) -> Option<Submission> {
        grade::grade_submission(self, req).await
    }

    pub async fn upload_assignment_file(&self, source: &Path, file_name: &str) -> Result<String> {
        files::upload_assignment_file(self, source, file_name).await
    }

    // ---- 文件读取 ----

    pub async fn assignment_file(&self, assignment_id: &str) -> Option<PathBuf> {
        files::assignment_file(self, assignment_id).await
    }

    pub async fn submission_file(&self, assignment_id: &str, student_id: &str) -> Option<PathBuf> {
        files::submission_file(self, assignment_id, student_id).await
    }

    // ---- 查询 ----

    pub fn get_assignment(&self, assignment_id: &str) -> Option<Assignment> {
        query::get_assignment(self, assignment_id)
    }

    pub fn active_assignments(&self) -> Vec<Assignment> {
        query::partition_by_deadline(self).0
    }

    pub fn past_assignments(&self) -> Vec<Assignment> {
        query::partition_by_deadline(self).1
    }

    /// 按同一时刻划分的（进行中, 已截止）
    pub fn partition_by_deadline(&self) -> (Vec<Assignment>, Vec<Assignment>) {
        query::partition_by_deadline(self)
    }

    pub fn assignments_for_student(&self, student_id: &str) -> Vec<(Assignment, bool)> {
        query::assignments_for_student(self, student_id)
    }

    pub fn pending_reviews(&self) -> Vec<PendingReview> {
        query::pending_reviews(self)
    }

    pub fn view(
        &self,
        role: UserRole,
        viewer_id: &str,
        view_query: &AssignmentViewQuery,
    ) -> Vec<StudentAssignment> {
        query::view(self, role, viewer_id, view_query)
    }

    pub fn export_json(&self) -> Result<String> {
        query::export_json(self)
    }
}
