//! 统一错误类型定义
//!
//! 任务核心本身不会失败（找不到 ID 以 `false` / `None` 表示），
//! 这里的错误只出现在前端输入校验和配置读写中。

use std::io;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O 错误（终端、配置文件、日志文件）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 菜单选项无效
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// 任务 ID 无法解析
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// 任务描述为空
    #[error("Task description cannot be empty")]
    EmptyDescription,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 交回 `main` 的 io::Result；Io 变体还原为原始错误，其余保留为 source
impl From<AppError> for io::Error {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}

impl AppError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
