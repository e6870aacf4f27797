//! Keyboard and mouse input handling

mod mouse;

pub use mouse::{handle_pointer_down, handle_pointer_move};

use crate::app::App;
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

/// Handle a key press using the configured bindings
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let Some(action) = app.config.keys.get_action(code, modifiers) else {
        return;
    };
    debug!(?action, "key action");

    match action {
        Action::Quit => app.should_quit = true,
        Action::ToggleMenu => app.toggle_menu(),
        Action::NextAgent => app.selector_mut().move_highlight(1),
        Action::PrevAgent => app.selector_mut().move_highlight(-1),
        Action::Confirm => {
            if app.selector().is_open() {
                app.select_highlighted();
            } else {
                app.toggle_menu();
            }
        }
        Action::Cancel => app.selector_mut().close(),
    }
}
