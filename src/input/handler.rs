use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode() {
        UiMode::Run => handle_run_mode(app, key),
        UiMode::Configure => handle_configure_mode(app, key),
        UiMode::AddingTask => handle_adding_task_mode(app, key),
    }
}

/// Handle keys on the run screen
fn handle_run_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Countdown controls
        KeyCode::Char(' ') => {
            app.toggle_start_pause();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
            Ok(false)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.quick_add();
            Ok(false)
        }

        // Completed screen
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.repeat();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.new_session();
            Ok(false)
        }

        // Configuration form (ignored while running)
        KeyCode::Char('c') => {
            app.toggle_configure();
            Ok(false)
        }

        // Task pane
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.toggle_selected_todo();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected_todo();
            Ok(false)
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_task_input();
            Ok(false)
        }
        KeyCode::Char('X') => {
            app.clear_general_todos();
            Ok(false)
        }

        // History pane
        KeyCode::Char('[') => {
            app.select_history_older();
            Ok(false)
        }
        KeyCode::Char(']') => {
            app.select_history_newer();
            Ok(false)
        }
        KeyCode::Char('C') => {
            app.clear_history();
            Ok(false)
        }

        // Focus view (fullscreen stand-in)
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.toggle_focus_view();
            Ok(false)
        }

        // Dismiss selection, then the focus view
        KeyCode::Esc => {
            app.dismiss();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys inside the configuration form
fn handle_configure_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+R restores the 25-minute defaults
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('r') = key.code {
            app.config_reset_defaults();
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.config_next_field();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.config_prev_field();
            Ok(false)
        }
        KeyCode::Enter => {
            app.commit_config_field();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.config_backspace();
            Ok(false)
        }
        KeyCode::Esc => {
            app.config_done();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.config_push_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while capturing a new general task
fn handle_adding_task_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_task_input();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_task_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.task_input.as_mut() {
                buffer.pop();
            }
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(buffer) = app.task_input.as_mut() {
                buffer.push(c);
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
