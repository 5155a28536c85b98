//! Central event handler that coordinates keyboard and mouse events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, resize) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            // Resize only needs a redraw
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_only_key_presses_are_handled() {
        let app = App::new(&Config::default());
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(EventHandler::handle_event(&app, &Event::Key(press)), Action::Quit);

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle_event(&app, &Event::Key(release)), Action::None);
        assert_eq!(EventHandler::handle_event(&app, &Event::Resize(80, 24)), Action::None);
    }
}
