//! 应用配置持久化
//!
//! 只保存用户偏好（主题、默认过滤条件、上次启动模式），任务本身不落盘。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{app_dir, load_toml, save_toml};
use crate::cli::Commands;
use crate::error::Result;
use crate::model::TaskFilter;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// 上次启动模式（无子命令时重放）
    #[serde(default)]
    pub last_launch: Option<LastLaunch>,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// 启动模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastLaunch {
    Tui,
    Shell,
}

impl LastLaunch {
    /// 显示名称（与子命令同名）
    pub fn display_label(&self) -> &'static str {
        match self {
            LastLaunch::Tui => "tui",
            LastLaunch::Shell => "shell",
        }
    }

    pub fn to_command(self) -> Commands {
        match self {
            LastLaunch::Tui => Commands::Tui,
            LastLaunch::Shell => Commands::Shell,
        }
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 列表视图配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// 启动时的过滤条件: "all" / "active" / "completed"
    #[serde(default = "default_filter_name")]
    pub default_filter: String,
    /// TUI 删除任务前是否弹窗确认
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_filter_name() -> String {
    TaskFilter::All.name().to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter_name(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl ViewConfig {
    pub fn filter(&self) -> TaskFilter {
        TaskFilter::from_name(&self.default_filter)
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            tracing::warn!("Failed to locate config: {}", e);
            Config::default()
        }
    }
}

/// 从指定路径加载配置
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    load_toml(path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
        Config::default()
    })
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&config_path()?, config)
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}
