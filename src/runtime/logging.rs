//! 日志初始化

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;

/// 安装全局 tracing 订阅者
///
/// 开发环境输出带文件和行号的文本日志，其他环境输出 JSON。
/// 返回的 guard 需要在进程存活期间持有，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    let result = if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        tracing_builder.json().try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {e}");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        let config = AppConfig::load().unwrap();
        let _first = init_tracing(&config);
        let _second = init_tracing(&config);
        tracing::info!("tracing initialized for tests");
    }
}
