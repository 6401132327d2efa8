use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};
use crate::model::TaskFilter;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 删除确认弹窗
    if app.confirm_remove.is_some() {
        handle_confirm_key(app, key);
        return;
    }

    // 输入框
    if app.input_mode != InputMode::Normal {
        handle_input_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理列表模式的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 过滤条件
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_filter(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_filter(),
        KeyCode::Char('1') => app.set_filter(TaskFilter::All),
        KeyCode::Char('2') => app.set_filter(TaskFilter::Active),
        KeyCode::Char('3') => app.set_filter(TaskFilter::Completed),

        // 任务操作
        KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Char('i') => app.open_add_input(),
        KeyCode::Char('e') => app.open_edit_input(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_remove_selected(),

        // 主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 帮助
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

/// 处理输入框的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 处理删除确认弹窗的键盘事件
fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_remove(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_remove(),
        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
    ) {
        app.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStore;
    use crate::storage::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(TaskStore::new(), &Config::default())
    }

    #[test]
    fn test_add_via_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('n'));
        // 输入模式下 q 是普通字符
        type_text(&mut app, "quiz");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.store.find_by_id(1).unwrap().description(), "qui");
    }

    #[test]
    fn test_toggle_and_filter_keys() {
        let mut app = new_app();
        for name in ["Buy milk", "Walk dog"] {
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, name);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.find_by_id(1).unwrap().is_completed());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filter, TaskFilter::Completed);
        assert_eq!(app.visible.len(), 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.filter, TaskFilter::All);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.filter, TaskFilter::Completed);
    }

    #[test]
    fn test_remove_confirm_keys() {
        let mut app = new_app();
        app.store.create("Buy milk");
        app.refresh();

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_escape_cancels_input_without_quitting() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);

        assert!(!app.should_quit);
        assert!(app.store.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_panel_swallows_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('n'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
