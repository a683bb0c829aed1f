use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Assignment Store")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("storage.root_dir", "data")?
            .set_default("storage.assignments_dir", "assignments")?
            .set_default("storage.submissions_dir", "submissions")?
            .set_default("submission.default_file_name", "submission.pdf")?
            .set_default("submission.max_file_name_length", 255)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ASSIGNMENT_STORE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("storage.root_dir", std::env::var("STORAGE_ROOT").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.submission.max_file_name_length == 0 {
            return Err(ConfigError::Message(
                "submission.max_file_name_length must be greater than 0".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 作业附件目录
    pub fn assignment_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.root_dir).join(&self.storage.assignments_dir)
    }

    /// 提交文件目录
    pub fn submission_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.root_dir).join(&self.storage.submissions_dir)
    }
}
