//! Dialog 组件共享工具函数

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 计算居中 dialog 区域
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let x = frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(frame_area.width),
        height.min(frame_area.height),
    )
}

/// 渲染 dialog 框架（带标题、边框）并返回内部可用区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 快捷键提示 spans，格式为 [(快捷键, 描述), ...]
pub fn hint_spans(hints: &[(&'static str, &'static str)], colors: &ThemeColors) -> Vec<Span<'static>> {
    hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::raw("   "));
            }
            v.push(Span::styled(
                *key,
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect()
}

/// 渲染居中提示行
pub fn render_hint(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&'static str, &'static str)],
    colors: &ThemeColors,
) {
    let hint = Paragraph::new(Line::from(hint_spans(hints, colors))).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_dialog() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_dialog(area, 40, 10), Rect::new(30, 15, 40, 10));

        // 屏幕比弹窗小时裁剪
        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(center_dialog(small, 40, 10), Rect::new(0, 0, 20, 5));
    }
}
