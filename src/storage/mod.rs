pub mod config;

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// 获取 ~/.tasklist/ 目录路径
pub fn app_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".tasklist"))
        .ok_or_else(|| AppError::config("Cannot find home directory"))
}

/// 确保日志目录存在: ~/.tasklist/logs/
pub fn ensure_log_dir() -> Result<PathBuf> {
    let path = app_dir()?.join("logs");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件（自动创建父目录）
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
