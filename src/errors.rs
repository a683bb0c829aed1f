//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_store_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AssignmentStoreError {
            $($variant(String),)*
        }

        impl AssignmentStoreError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssignmentStoreError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssignmentStoreError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssignmentStoreError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AssignmentStoreError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssignmentStoreError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_store_errors! {
    FileOperation("E001", "File Operation Error"),
    NotFound("E002", "Resource Not Found"),
    DeadlinePassed("E003", "Deadline Passed"),
    Validation("E004", "Validation Error"),
    Configuration("E005", "Configuration Error"),
    Serialization("E006", "Serialization Error"),
    StorageInit("E007", "Storage Initialization Error"),
}

impl AssignmentStoreError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 提交被拒绝（而非内部故障）的错误
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AssignmentStoreError::NotFound(_)
                | AssignmentStoreError::DeadlinePassed(_)
                | AssignmentStoreError::Validation(_)
        )
    }
}

impl fmt::Display for AssignmentStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssignmentStoreError {}

impl From<std::io::Error> for AssignmentStoreError {
    fn from(err: std::io::Error) -> Self {
        AssignmentStoreError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AssignmentStoreError {
    fn from(err: serde_json::Error) -> Self {
        AssignmentStoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssignmentStoreError>;
