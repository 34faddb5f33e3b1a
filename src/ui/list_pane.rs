use crate::app::AppState;
use crate::domain::{checkbox, TodoRow};
use crate::ui::styles::{
    border_style, default_style, done_style, modal_title_style, selected_style,
    session_marker_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the merged task pane: session tasks first, then general tasks,
/// with the capture line for a new general task at the bottom when open.
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.visible_rows();

    let mut items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if idx == app.selected_todo {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_todo_line(row)).style(style)
        })
        .collect();

    if let Some(buffer) = &app.task_input {
        let input_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(buffer.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ]);
        items.push(ListItem::new(input_line));
    }

    let session_count = app.engine.session_todos().len();
    let title = format!(
        " Tasks ({} session · {} general) ",
        session_count,
        app.general_todos.len()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single task row: origin marker, checkbox, text
fn create_todo_line(row: &TodoRow) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!("{} ", row.origin.marker()),
        session_marker_style(),
    ));

    let check_style = if row.task.done {
        done_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(
        format!("{} ", checkbox(row.task.done)),
        check_style,
    ));
    spans.push(Span::raw(row.task.text.clone()));

    Line::from(spans)
}
