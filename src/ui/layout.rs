use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows given to the countdown pane above the lists
const TIMER_PANE_HEIGHT: u16 = 9;

/// Main layout structure
pub struct MainLayout {
    pub timer_area: Rect,
    pub todo_area: Option<Rect>,
    pub history_area: Option<Rect>,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane: fixed height, full width
/// - Lower area: Tasks (55%) | History (45%)
///
/// In the focus view the timer takes the whole content area and the list
/// panes disappear.
pub fn create_layout(area: Rect, focus_view: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    if focus_view {
        return MainLayout {
            timer_area: content_area,
            todo_area: None,
            history_area: None,
            keybindings_area,
        };
    }

    let vertical_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TIMER_PANE_HEIGHT), // Countdown pane
            Constraint::Min(0),                    // List panes
        ])
        .split(content_area);

    let lower_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Task pane
            Constraint::Percentage(45), // History pane
        ])
        .split(vertical_split[1]);

    MainLayout {
        timer_area: vertical_split[0],
        todo_area: Some(lower_split[0]),
        history_area: Some(lower_split[1]),
        keybindings_area,
    }
}

/// Create centered modal area (configuration form, history detail)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.timer_area.height, TIMER_PANE_HEIGHT);
        assert!(layout.todo_area.is_some());
        assert!(layout.history_area.is_some());
        assert!(layout.todo_area.unwrap().height > 0);
    }

    #[test]
    fn test_focus_view_hides_list_panes() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, true);

        assert!(layout.todo_area.is_none());
        assert!(layout.history_area.is_none());
        // The countdown fills everything below the hint bar
        assert_eq!(layout.timer_area.height, area.height - 1);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 16);
    }
}
