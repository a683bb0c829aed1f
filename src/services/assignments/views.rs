//! 视图映射
//!
//! 把快照中的作业转换为不同角色看到的列表行。全部是纯函数，
//! 结果只取决于 `(作业列表, 角色, 查看者 ID, 当前时间)`。

use chrono::{DateTime, NaiveTime, Utc};
use std::collections::HashMap;

use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{AssignmentViewQuery, SortOption};
use crate::models::assignments::responses::{
    AssignmentStatus, PendingReview, StudentAssignment, UserRole,
};

/// 计算某学生在某作业上的状态
pub fn status_for(
    assignment: &Assignment,
    student_id: &str,
    now: &DateTime<Utc>,
) -> AssignmentStatus {
    if assignment.has_student_submitted(student_id) {
        AssignmentStatus::Completed
    } else if assignment.is_deadline_passed(now) {
        AssignmentStatus::Overdue
    } else {
        AssignmentStatus::Pending
    }
}

/// 学生视角：每个作业一行
pub fn student_view(
    assignment: &Assignment,
    student_id: &str,
    now: &DateTime<Utc>,
) -> StudentAssignment {
    let submission = assignment.submissions.get(student_id);

    StudentAssignment {
        id: assignment.id.clone(),
        title: assignment.title.clone(),
        subject: assignment.subject.clone(),
        due_date: assignment.due_date(),
        status: status_for(assignment, student_id, now),
        submitted_file: submission.map(|s| s.file_name.clone()),
        grade: submission.and_then(|s| s.grade.clone()),
        feedback: submission.and_then(|s| s.feedback.clone()),
    }
}

/// 教师视角：每份提交一行；没有提交时整个作业占一行
pub fn faculty_rows(assignment: &Assignment, now: &DateTime<Utc>) -> Vec<StudentAssignment> {
    if assignment.submissions.is_empty() {
        let status = if assignment.is_deadline_passed(now) {
            AssignmentStatus::Overdue
        } else {
            AssignmentStatus::Pending
        };
        return vec![StudentAssignment {
            id: assignment.id.clone(),
            title: assignment.title.clone(),
            subject: assignment.subject.clone(),
            due_date: assignment.due_date(),
            status,
            submitted_file: None,
            grade: None,
            feedback: None,
        }];
    }

    let mut submissions: Vec<_> = assignment.submissions.iter().collect();
    submissions.sort_by(|a, b| a.0.cmp(b.0));

    submissions
        .into_iter()
        .map(|(student_id, submission)| StudentAssignment {
            id: format!("{}_{}", assignment.id, student_id),
            title: format!("{} ({})", assignment.title, submission.student_name),
            subject: assignment.subject.clone(),
            due_date: assignment.due_date(),
            status: AssignmentStatus::Completed,
            submitted_file: Some(submission.file_name.clone()),
            grade: submission.grade.clone(),
            feedback: submission.feedback.clone(),
        })
        .collect()
}

pub fn project(
    assignments: &[Assignment],
    role: UserRole,
    viewer_id: &str,
    now: &DateTime<Utc>,
) -> Vec<StudentAssignment> {
    match role {
        UserRole::Student => assignments
            .iter()
            .map(|a| student_view(a, viewer_id, now))
            .collect(),
        UserRole::Faculty => assignments
            .iter()
            .flat_map(|a| faculty_rows(a, now))
            .collect(),
    }
}

/// 按状态过滤并稳定排序
pub fn apply_query(
    rows: Vec<StudentAssignment>,
    query: &AssignmentViewQuery,
) -> Vec<StudentAssignment> {
    let mut rows: Vec<_> = rows
        .into_iter()
        .filter(|row| query.statuses.is_empty() || query.statuses.contains(&row.status))
        .collect();

    match query.sort_by {
        SortOption::DueDate => rows.sort_by_key(|r| r.due_date),
        SortOption::Subject => rows.sort_by(|a, b| a.subject.cmp(&b.subject)),
        SortOption::Status => rows.sort_by_key(|r| r.status),
        SortOption::Title => rows.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    rows
}

/// 所有未评分的提交，按快照顺序、学生 ID 排列
pub fn pending_reviews(assignments: &[Assignment]) -> Vec<PendingReview> {
    let mut reviews = Vec::new();
    for assignment in assignments {
        let mut ungraded: Vec<_> = assignment
            .submissions
            .values()
            .filter(|s| !s.is_graded())
            .collect();
        ungraded.sort_by(|a, b| a.student_id.cmp(&b.student_id));

        reviews.extend(ungraded.into_iter().map(|submission| PendingReview {
            assignment_id: assignment.id.clone(),
            assignment_title: assignment.title.clone(),
            submission: submission.clone(),
        }));
    }
    reviews
}

/// 从列表行还原作业
///
/// 行中没有描述和提交信息，截止时间取截止日期当天 23:59。
pub fn assignment_from_view(view: &StudentAssignment, created_by: &str) -> Assignment {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);

    Assignment {
        id: view.id.clone(),
        title: view.title.clone(),
        subject: view.subject.clone(),
        description: String::new(),
        deadline: view.due_date.and_time(end_of_day).and_utc(),
        resource_link: None,
        attached_file: None,
        created_by: created_by.to_string(),
        submissions: HashMap::new(),
    }
}
