use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskCounts;
use crate::theme::ThemeColors;

/// Header 高度
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏：标题 + 完成进度
pub fn render(frame: &mut Frame, area: Rect, counts: TaskCounts, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, progress_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(inner);

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "ToDo List",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let progress = Line::from(vec![
        Span::styled(
            format!("{}/{}", counts.completed, counts.total),
            Style::default().fg(colors.done).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" done  ", Style::default().fg(colors.muted)),
        Span::styled(
            counts.active.to_string(),
            Style::default().fg(colors.pending).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" left ", Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(
        Paragraph::new(progress).alignment(Alignment::Right),
        progress_area,
    );
}
