//! CLI 模块

pub mod shell;

use clap::{Parser, Subcommand};

use crate::storage::config::LastLaunch;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "In-memory to-do list with an interactive shell and a terminal UI")]
pub struct Cli {
    /// Log level for ~/.tasklist/logs/tasklist.log (overridden by TASKLIST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the terminal UI (default)
    Tui,
    /// Start the line-oriented interactive shell
    Shell,
}

impl Commands {
    /// 需要记录为上次启动模式的命令
    pub fn to_last_launch(self) -> Option<LastLaunch> {
        match self {
            Commands::Tui => Some(LastLaunch::Tui),
            Commands::Shell => Some(LastLaunch::Shell),
        }
    }
}
