//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::dialog_utils::center_dialog;
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 24;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);

    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Tab / → / l", "Next filter", colors),
        key_line("⇧Tab / ← / h", "Previous filter", colors),
        key_line("1 / 2 / 3", "All / Active / Done", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("n / a / i", "New task", colors),
        key_line("Space / Enter", "Toggle completed", colors),
        key_line("e", "Edit description", colors),
        key_line("x / Del", "Remove task", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Cycle theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q / Esc", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            "  Tasks are kept in memory only.",
            Style::default().fg(colors.muted),
        )),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<15}", key), Style::default().fg(colors.highlight)),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
