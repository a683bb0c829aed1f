use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Submission;

/// 学生视角的作业状态（读取时计算，不存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Faculty,
}

/// 作业列表行
///
/// 学生视角每个作业一行；教师视角每份提交一行，
/// 此时 `id` 为 `{assignment_id}_{student_id}`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAssignment {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub submitted_file: Option<String>,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

/// 待评分的提交
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingReview {
    pub assignment_id: String,
    pub assignment_title: String,
    pub submission: Submission,
}
