use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskFilter;
use crate::theme::ThemeColors;

/// 渲染空状态提示
/// `store_empty` 为 true 时说明还没有任何任务，否则只是当前过滤条件下为空
pub fn render(
    frame: &mut Frame,
    area: Rect,
    filter: TaskFilter,
    store_empty: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            get_hint_text(filter, store_empty),
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " n ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let y_offset = inner.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        x: inner.x,
        y: inner.y + y_offset,
        width: inner.width,
        height: inner.height.saturating_sub(y_offset),
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

fn get_hint_text(filter: TaskFilter, store_empty: bool) -> &'static str {
    if store_empty {
        return "No tasks found.";
    }
    match filter {
        TaskFilter::All => "No tasks found.",
        TaskFilter::Active => "Nothing left to do.",
        TaskFilter::Completed => "No completed tasks yet.",
    }
}
