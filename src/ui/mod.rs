pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_history_detail;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size, app.focus_view);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area);
    if let Some(todo_area) = layout.todo_area {
        render_list_pane(f, app, todo_area);
    }
    if let Some(history_area) = layout.history_area {
        render_history_pane(f, app, history_area);
    }

    // Render configuration form if open
    if app.ui_mode() == UiMode::Configure {
        render_input_form(f, app, size);
        return; // The form covers the detail overlay
    }

    // Render history detail overlay if an entry is selected
    if app.selected_history.is_some() {
        render_history_detail(f, app, size);
    }
}
