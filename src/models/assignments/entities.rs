use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::time_format::time_remaining_label;

/// 作业（教师创建，所有角色共享）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID，创建后不可变
    pub id: String,
    // 作业标题
    pub title: String,
    // 所属科目
    pub subject: String,
    // 作业描述
    pub description: String,
    // 截止时间
    pub deadline: DateTime<Utc>,
    // 参考资料链接
    pub resource_link: Option<String>,
    // 作业附件（私有目录中的绝对路径）
    pub attached_file: Option<String>,
    // 创建者（教师）ID
    pub created_by: String,
    // 学生 ID -> 提交，每名学生至多一份
    #[serde(default)]
    pub submissions: HashMap<String, Submission>,
}

impl Assignment {
    /// 截止时间是否已过（严格大于）
    pub fn is_deadline_passed(&self, now: &DateTime<Utc>) -> bool {
        now > &self.deadline
    }

    pub fn has_student_submitted(&self, student_id: &str) -> bool {
        self.submissions.contains_key(student_id)
    }

    /// 截止日期（截止时间的日期部分）
    pub fn due_date(&self) -> NaiveDate {
        self.deadline.date_naive()
    }

    pub fn time_remaining_label(&self, now: &DateTime<Utc>) -> String {
        time_remaining_label(&self.deadline, now)
    }

    /// 尚未评分的提交数
    pub fn ungraded_count(&self) -> usize {
        self.submissions.values().filter(|s| !s.is_graded()).count()
    }
}

/// 学生提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub student_id: String,
    // 提交时记录的学生姓名
    pub student_name: String,
    // 提交文件副本的绝对路径
    pub file_path: String,
    pub submitted_at: DateTime<Utc>,
    // 显示用文件名
    pub file_name: String,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}
