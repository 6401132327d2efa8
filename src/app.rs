use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use tracing::{debug, warn};

use crate::cli::shell::validate_description;
use crate::model::{Task, TaskFilter, TaskId, TaskStore};
use crate::storage::config::{self, Config};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 输入框状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// 列表导航
    #[default]
    Normal,
    /// 新建任务
    Adding,
    /// 编辑指定任务的描述
    Editing(TaskId),
}

/// 全局应用状态
///
/// 持有 `TaskStore`，每次修改后通过 `refresh` 从 store 重新取当前过滤条件的快照。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务数据（唯一来源）
    pub store: TaskStore,
    /// 当前过滤条件
    pub filter: TaskFilter,
    /// 当前过滤条件下的任务快照
    pub visible: Vec<Task>,
    /// 列表选择状态
    pub list_state: ListState,
    /// 输入框模式
    pub input_mode: InputMode,
    /// 输入框内容
    pub input: String,
    /// 待确认删除的任务
    pub confirm_remove: Option<Task>,
    /// 删除前是否确认
    pub confirm_delete: bool,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 启动时加载的配置，主题切换后写回
    config: Config,
    /// 配置文件路径；None 时主题只在本次会话生效
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let mut app = Self {
            should_quit: false,
            store,
            filter: config.view.filter(),
            visible: Vec::new(),
            list_state: ListState::default(),
            input_mode: InputMode::Normal,
            input: String::new(),
            confirm_remove: None,
            confirm_delete: config.view.confirm_delete,
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_help: false,
            last_system_dark: detect_system_theme(),
            config: config.clone(),
            config_path: None,
        };
        app.refresh();
        app
    }

    /// 设置配置文件路径，之后切换主题会保存到该文件
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// 从 store 重新加载当前过滤条件的快照，并修正选中项
    pub fn refresh(&mut self) {
        self.visible = self.store.list(self.filter);
        self.ensure_selection();
    }

    fn ensure_selection(&mut self) {
        let len = self.visible.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i))
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== Filter ==========

    pub fn set_filter(&mut self, filter: TaskFilter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.list_state.select(None);
        self.refresh();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    // ========== Input ==========

    /// 打开新建任务输入框
    pub fn open_add_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Adding;
    }

    /// 打开编辑输入框（预填当前描述）
    pub fn open_edit_input(&mut self) {
        let Some((id, description)) = self
            .selected_task()
            .map(|t| (t.id(), t.description().to_string()))
        else {
            return;
        };
        self.input = description;
        self.input_mode = InputMode::Editing(id);
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// 提交输入框：新建或修改描述
    pub fn submit_input(&mut self) {
        let validated = validate_description(&self.input).map(|d| d.trim().to_string());
        let description = match validated {
            Ok(d) => d,
            Err(e) => {
                self.show_toast(e.to_string());
                return;
            }
        };

        match self.input_mode {
            InputMode::Adding => {
                let task = self.store.create(description);
                debug!(id = task.id(), "task created");
                self.show_toast(format!("Added: {}", task.description()));
                self.refresh();
                self.select_task(task.id());
            }
            InputMode::Editing(id) => {
                if self.store.set_description(id, description) {
                    debug!(id, "task description updated");
                    self.show_toast("Task updated");
                } else {
                    self.show_toast(format!("No task found with ID {}", id));
                }
                self.refresh();
            }
            InputMode::Normal => {}
        }
        self.cancel_input();
    }

    /// 选中指定任务（不在当前列表中则保持不变）
    fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.visible.iter().position(|t| t.id() == id) {
            self.list_state.select(Some(index));
        }
    }

    // ========== Task Actions ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(Task::id) else {
            return;
        };
        // 以 store 中的实时状态为准
        let completed = !self
            .store
            .find_by_id(id)
            .is_some_and(Task::is_completed);

        if self.store.set_completed(id, completed) {
            debug!(id, completed, "task toggled");
        } else {
            self.show_toast(format!("No task found with ID {}", id));
        }
        self.refresh();
    }

    /// 删除选中任务（按配置决定是否先确认）
    pub fn request_remove_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        if self.confirm_delete {
            self.confirm_remove = Some(task);
        } else {
            self.remove_task(task.id());
        }
    }

    pub fn confirm_remove(&mut self) {
        if let Some(task) = self.confirm_remove.take() {
            self.remove_task(task.id());
        }
    }

    pub fn cancel_remove(&mut self) {
        self.confirm_remove = None;
    }

    fn remove_task(&mut self, id: TaskId) {
        if self.store.remove(id) {
            debug!(id, "task removed");
            self.show_toast("Task removed");
        } else {
            self.show_toast(format!("No task found with ID {}", id));
        }
        self.refresh();
    }

    // ========== Theme ==========

    /// 切换到下一个主题并保存到配置
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
        self.save_theme();
    }

    fn save_theme(&mut self) {
        self.config.theme.name = self.theme.label().to_string();
        let Some(ref path) = self.config_path else {
            return;
        };
        if let Err(e) = config::save_config_to(path, &self.config) {
            warn!("Failed to save theme: {}", e);
            self.show_toast(format!("Failed to save theme: {}", e));
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 清理过期的 Toast
    pub fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
