use crate::app::AppState;
use crate::domain::{completion_label, format_duration, HistoryEntry};
use crate::ui::styles::{
    border_style, default_style, dim_style, selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the history pane: completed sessions, newest first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let entries = app.engine.history().entries();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if app.selected_history == Some(entry.id) {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_history_line(entry)).style(style)
        })
        .collect();

    let title = format!(" History ({}) ", entries.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create one history row: local completion time, name, duration, task summary
fn create_history_line(entry: &HistoryEntry) -> Line<'static> {
    let at_local = entry.at.with_timezone(&Local).format("%b %d %H:%M");
    Line::from(vec![
        Span::styled(format!("{}  ", at_local), dim_style()),
        Span::raw(entry.name.clone()),
        Span::styled(
            format!("  {} · {}", format_duration(entry.seconds), completion_label(entry)),
            dim_style(),
        ),
    ])
}
