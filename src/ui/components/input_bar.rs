//! 任务输入框（新建 / 编辑）

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 输入框高度
pub const INPUT_HEIGHT: u16 = 3;

/// 渲染输入框；Normal 模式下显示为未激活的占位提示
pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, input: &str, colors: &ThemeColors) {
    let (title, border_color) = match mode {
        InputMode::Normal => (" New Task ".to_string(), colors.border),
        InputMode::Adding => (" New Task ".to_string(), colors.highlight),
        InputMode::Editing(id) => (format!(" Edit #{} ", id), colors.highlight),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if mode == InputMode::Normal {
        Line::from(vec![
            Span::styled(" Press ", Style::default().fg(colors.muted)),
            Span::styled(
                "n",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to add a task", Style::default().fg(colors.muted)),
        ])
    } else {
        // 只显示末尾能放下的部分
        let visible_width = area.width.saturating_sub(4) as usize;
        let skip = input.chars().count().saturating_sub(visible_width);
        let shown: String = input.chars().skip(skip).collect();
        Line::from(vec![
            Span::raw(" "),
            Span::styled(shown, Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.highlight)), // 光标
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
