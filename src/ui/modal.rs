use crate::app::AppState;
use crate::domain::{checkbox, completion_label, format_duration};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the detail overlay for the selected history entry
pub fn render_history_detail(f: &mut Frame, app: &AppState, area: Rect) {
    let entry = match app.selected_history.and_then(|id| app.engine.history().get(id)) {
        Some(entry) => entry,
        None => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  Completed: ", modal_title_style()),
        Span::raw(entry.at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Duration:  ", modal_title_style()),
        Span::raw(format_duration(entry.seconds)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Tasks:     ", modal_title_style()),
        Span::raw(completion_label(entry)),
    ]));
    lines.push(Line::raw(""));

    if entry.session_todos.is_empty() {
        lines.push(Line::raw("  (no session tasks)"));
    } else {
        for task in &entry.session_todos {
            lines.push(Line::raw(format!("  {} {}", checkbox(task.done), task.text)));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Close"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", entry.name),
                    modal_title_style(),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
