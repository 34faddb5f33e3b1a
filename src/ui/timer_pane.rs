use crate::app::AppState;
use crate::domain::{completion_label, format_duration, format_time, EngineState};
use crate::ui::styles::{
    border_style, completed_style, dim_style, gauge_style, paused_style, readout_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the countdown pane: session name, big readout, state badge and
/// a progress gauge along the bottom.
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let engine = &app.engine;
    let state = engine.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" {} ", engine.config().display_name()),
            title_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Readout and badge
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let badge_style = match state {
        EngineState::Running => running_style(),
        EngineState::Completed => completed_style(),
        _ => paused_style(),
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format_time(engine.remaining() as i64),
            readout_style(),
        )),
        Line::from(Span::styled(state.label(), badge_style)),
    ];

    if state == EngineState::Completed {
        // The just-archived entry is the newest one
        if let Some(entry) = engine.history().entries().first() {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} · {} · {}",
                    entry.name,
                    format_duration(entry.seconds),
                    completion_label(entry)
                ),
                completed_style(),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Space start again · g repeat with tasks · n new session",
            dim_style(),
        )));
    }

    let readout = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    f.render_widget(readout, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(engine.progress().clamp(0.0, 1.0))
        .label(format!(
            "{} / {}",
            format_time((engine.total_seconds() - engine.remaining()) as i64),
            format_time(engine.total_seconds() as i64)
        ));
    f.render_widget(gauge, chunks[1]);
}
