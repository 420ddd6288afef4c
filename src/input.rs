//! Input module - keyboard and mouse handling for game controls

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Player intents the event loop acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    /// Restart the game with a fresh shuffle
    Restart,
    /// Left mouse press at terminal coordinates; the view hit-tests it
    Click { col: u16, row: u16 },
}

/// Map a terminal event to a game action
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(InputAction::Click {
                col: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputAction> {
    if should_quit(key) {
        return Some(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    #[test]
    fn test_restart_key() {
        let event = Event::Key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(map_event(&event), Some(InputAction::Restart));
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let event = Event::Key(KeyEvent::from(code));
            assert_eq!(map_event(&event), Some(InputAction::Quit));
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
    }

    #[test]
    fn test_left_click_carries_coordinates() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_event(&event),
            Some(InputAction::Click { col: 12, row: 5 })
        );
    }

    #[test]
    fn test_other_events_are_ignored() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&event), None);

        let event = Event::Key(KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(map_event(&event), None);
    }
}
