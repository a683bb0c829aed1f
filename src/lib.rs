//! Assignment Store - 作业与提交共享存储
//!
//! 为教务客户端提供作业、学生提交和评分的单一数据源，
//! 提交文件与作业附件保存在私有目录中。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 启动与日志初始化
//! - `services`: 作业存储与视图映射
//! - `storage`: 私有文件存储
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
