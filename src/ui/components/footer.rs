use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::dialog_utils::hint_spans;
use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    has_items: bool,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::raw("  ")];
    spans.extend(hint_spans(&get_shortcuts(mode, has_items), colors));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Adding | InputMode::Editing(_) => {
            vec![("Enter", "save"), ("Esc", "cancel")]
        }
        InputMode::Normal if has_items => vec![
            ("n", "new"),
            ("Space", "toggle"),
            ("e", "edit"),
            ("x", "remove"),
            ("Tab", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Normal => vec![("n", "new"), ("Tab", "filter"), ("?", "help"), ("q", "quit")],
    }
}
