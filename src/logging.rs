//! 日志初始化
//!
//! TUI 占用整个终端，所以日志只写入 ~/.tasklist/logs/tasklist.log。

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Result;
use crate::storage;

/// 日志级别环境变量
pub const LOG_ENV: &str = "TASKLIST_LOG";

const LOG_FILE: &str = "tasklist.log";

/// 构建过滤器：环境变量优先，其次命令行参数，默认 info
fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化全局 tracing subscriber
pub fn init(level: Option<&str>) -> Result<()> {
    let path = storage::ensure_log_dir()?.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| crate::error::AppError::config(e.to_string()))?;

    tracing::debug!(log_file = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // 只是确保不会 panic
        let _filter = build_filter(Some("not a [valid directive"));
        let _filter = build_filter(None);
    }
}
