use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub submission: SubmissionConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub root_dir: String,        // 私有存储根目录
    pub assignments_dir: String, // 作业附件子目录
    pub submissions_dir: String, // 学生提交文件子目录
}

/// 提交配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub default_file_name: String,   // 未指定文件名时使用的显示名
    pub max_file_name_length: usize, // 文件名最大长度
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            default_file_name: "submission.pdf".to_string(),
            max_file_name_length: 255,
        }
    }
}
