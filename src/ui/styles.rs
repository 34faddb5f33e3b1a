use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Countdown readout style
pub fn readout_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused status badge style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Completed status badge style
pub fn completed_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Done task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Session-task origin marker style
pub fn session_marker_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Cyan).bg(Color::DarkGray)
}

/// Dimmed secondary text style
pub fn dim_style() -> Style {
    Style::default().fg(Color::Gray)
}
