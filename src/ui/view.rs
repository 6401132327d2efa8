use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    confirm_dialog, empty_state, footer, header, help_panel, input_bar, tabs, task_list, toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_bar::INPUT_HEIGHT),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let counts = app.store.counts();

    header::render(frame, header_area, counts, colors);
    input_bar::render(frame, input_area, app.input_mode, &app.input, colors);
    tabs::render(frame, tabs_area, app.filter, counts, colors);

    if app.visible.is_empty() {
        empty_state::render(frame, list_area, app.filter, app.store.is_empty(), colors);
    } else {
        task_list::render(
            frame,
            list_area,
            &app.visible,
            app.list_state.selected(),
            colors,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.input_mode,
        !app.visible.is_empty(),
        colors,
    );

    // 弹窗
    if let Some(ref task) = app.confirm_remove {
        confirm_dialog::render(frame, task, colors);
    }

    if app.show_help {
        help_panel::render(frame, colors);
    }

    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStore;
    use crate::storage::config::Config;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_render_task_rows() {
        let mut store = TaskStore::new();
        store.create("Buy milk");
        store.create("Walk dog");
        store.mark_completed(1);
        let app = App::new(store, &Config::default());

        let screen = draw(&app);
        assert!(screen.contains("[1]"));
        assert!(screen.contains("[✓]"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Walk dog"));
        assert!(screen.contains("All (2)"));
        assert!(screen.contains("Completed (1)"));
    }

    #[test]
    fn test_render_empty_and_dialogs() {
        let mut app = App::new(TaskStore::new(), &Config::default());
        let screen = draw(&app);
        assert!(screen.contains("No tasks found."));

        app.show_help = true;
        let screen = draw(&app);
        assert!(screen.contains("Help"));

        app.show_help = false;
        app.store.create("Buy milk");
        app.refresh();
        app.request_remove_selected();
        let screen = draw(&app);
        assert!(screen.contains("Remove task #1?"));
    }
}
