//! 删除确认弹窗

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染删除确认弹窗
pub fn render(frame: &mut Frame, task: &Task, colors: &ThemeColors) {
    let area = center_dialog(frame.area(), 50, 8);
    let inner = render_dialog_frame(frame, area, " Remove ", colors.warning, colors);

    let [_, message_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let message = vec![
        Line::from(vec![
            Span::styled("Remove task ", Style::default().fg(colors.text)),
            Span::styled(
                format!("#{}", task.id()),
                Style::default()
                    .fg(colors.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("?", Style::default().fg(colors.text)),
        ]),
        Line::from(Span::styled(
            task.description().to_string(),
            Style::default().fg(colors.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    render_hint(frame, hint_area, &[("y", "remove"), ("n", "cancel")], colors);
}
