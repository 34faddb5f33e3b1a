use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the active mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode() {
        UiMode::Run => Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("+ 5min   "),
            Span::raw("c configure   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter toggle   "),
            Span::raw("d delete   "),
            Span::raw("[/] history   "),
            Span::raw("f focus   "),
            Span::raw("q quit"),
        ]),
        UiMode::Configure => Line::from(vec![
            Span::raw(" Tab/↓ next field   "),
            Span::raw("Shift+Tab/↑ prev   "),
            Span::raw("Enter commit   "),
            Span::raw("Ctrl+R defaults   "),
            Span::raw("Esc done"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" type the task   "),
            Span::raw("Enter add   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
