mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;

use std::io::{self, Write};
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::{shell::Shell, Cli, Commands};
use model::TaskStore;
use storage::config::{self, Config};

/// 启动 TUI 界面
fn run_tui(config: &Config) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用，store 由 App 独占
    let mut app = App::new(TaskStore::new(), config);
    match config::config_path() {
        Ok(path) => app = app.with_config_path(path),
        Err(e) => warn!("Theme changes will not be saved: {}", e),
    }
    info!("tui session started");

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();
    info!(tasks = app.store.len(), "tui session ended");

    result
}

/// 启动行式 Shell
fn run_shell() -> io::Result<()> {
    let mut store = TaskStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Shell::new(&mut store, stdin.lock(), stdout.lock())
        .run()
        .map_err(io::Error::from)
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut config = config::load_config();

    // 确定要执行的命令
    let (command, from_replay) = match cli.command {
        Some(cmd) => (cmd, false),
        None => {
            // 无子命令：重放上次启动模式，默认 TUI
            match config.last_launch {
                Some(ll) => {
                    if ll != config::LastLaunch::Tui {
                        eprintln!("tasklist → tasklist {}", ll.display_label());
                    }
                    (ll.to_command(), true)
                }
                None => (Commands::Tui, true),
            }
        }
    };

    // 如果是新的启动模式命令（非重放），保存到配置
    if !from_replay {
        if let Some(last_launch) = command.to_last_launch() {
            config.last_launch = Some(last_launch);
            if let Err(e) = config::save_config(&config) {
                warn!("Failed to save config: {}", e);
            }
        }
    }

    // 统一调度
    match command {
        Commands::Tui => run_tui(&config)?,
        Commands::Shell => run_shell()?,
    }

    io::stdout().flush()
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::view::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
