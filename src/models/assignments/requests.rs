use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::HashSet;
use uuid::Uuid;

use crate::errors::{AssignmentStoreError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::responses::AssignmentStatus;
use crate::utils::validate::{validate_resource_link, validate_title};

/// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub resource_link: Option<String>,
    pub attached_file: Option<String>, // upload_assignment_file 返回的路径
}

impl CreateAssignmentRequest {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title).map_err(AssignmentStoreError::validation)?;
        if self.subject.trim().is_empty() {
            return Err(AssignmentStoreError::validation("Subject must not be empty"));
        }
        if let Some(link) = self.resource_link.as_deref() {
            validate_resource_link(link).map_err(AssignmentStoreError::validation)?;
        }
        Ok(())
    }

    /// 校验并生成带新 ID 的作业实体
    pub fn into_assignment(self, created_by: &str) -> Result<Assignment> {
        self.validate()?;
        Ok(Assignment {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            description: self.description.unwrap_or_default(),
            deadline: self.deadline,
            resource_link: self.resource_link,
            attached_file: self.attached_file,
            created_by: created_by.to_string(),
            submissions: HashMap::new(),
        })
    }
}

/// 学生提交请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub assignment_id: String,
    pub student_id: String,
    pub student_name: String,
    pub source_path: String,       // 学生选择的原始文件
    pub file_name: Option<String>, // 为空时使用默认文件名
}

/// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub assignment_id: String,
    pub student_id: String,
    pub grade: String,
    pub feedback: String,
}

/// 列表排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    DueDate,
    Subject,
    Status,
    Title,
}

/// 列表视图查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentViewQuery {
    /// 为空表示不过滤
    #[serde(default)]
    pub statuses: HashSet<AssignmentStatus>,
    #[serde(default)]
    pub sort_by: SortOption,
}
