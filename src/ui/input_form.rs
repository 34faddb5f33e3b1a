use crate::app::AppState;
use crate::domain::{checkbox, ConfigField};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the session configuration form: duration fields, session name,
/// the pending session task list and the task capture line.
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    for field in ConfigField::all() {
        lines.push(field_line(app, *field));
    }

    lines.push(Line::raw(""));
    let tasks = app.engine.session_todos().as_slice();
    if tasks.is_empty() {
        lines.push(Line::raw("  (no session tasks yet)"));
    } else {
        for task in tasks {
            lines.push(Line::raw(format!("    {} {}", checkbox(task.done), task.text)));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(
        "Tab/↓ next field · Shift+Tab/↑ previous · Enter commit · Ctrl+R defaults · Esc done",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Configure Session ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// One form row; the focused field shows the live text buffer and a cursor
fn field_line(app: &AppState, field: ConfigField) -> Line<'static> {
    let focused = app.config_field == field;
    let value = if focused {
        app.config_buffer.clone()
    } else {
        committed_value(app, field)
    };

    let mut spans = vec![Span::raw(format!(
        "{} {:<18}",
        if focused { ">" } else { " " },
        format!("{}:", field.label())
    ))];
    if focused {
        spans.push(Span::styled(value, modal_title_style()));
        spans.push(Span::styled("█", modal_title_style()));
    } else {
        spans.push(Span::raw(value));
    }
    Line::from(spans)
}

fn committed_value(app: &AppState, field: ConfigField) -> String {
    let config = app.engine.config();
    match field {
        ConfigField::Hours => config.hours.to_string(),
        ConfigField::Minutes => config.minutes.to_string(),
        ConfigField::Seconds => config.seconds.to_string(),
        ConfigField::Name => config.name.clone(),
        ConfigField::NewTask => String::new(),
    }
}
