use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::truncate;
use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表
///
/// 每行: `[<id>] [<mark>] <description>`，与 Shell 的输出格式一致。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    // 描述列可用宽度：总宽 - 边框 - 选择器 - ID - 标记 - 列间距
    let id_width = tasks
        .iter()
        .map(|t| t.id().to_string().len() + 2)
        .max()
        .unwrap_or(3) as u16;
    let desc_width = area.width.saturating_sub(2 + 2 + id_width + 3 + 3) as usize;

    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let mark_style = if task.is_completed() {
                Style::default().fg(colors.done).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.pending)
            };
            let desc_style = if task.is_completed() {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(format!("[{}]", task.id())).style(Style::default().fg(colors.muted)),
                Cell::from(format!("[{}]", task.mark())).style(mark_style),
                Cell::from(truncate(task.description(), desc_width)).style(desc_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),        // 选择器
        Constraint::Length(id_width), // ID
        Constraint::Length(3),        // 完成标记
        Constraint::Fill(1),          // 描述
    ];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
