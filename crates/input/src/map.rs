//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Only presses count; repeats and releases map to nothing.
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(Key::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::SoftDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Right)), Some(Key::Right));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Down)), Some(Key::SoftDrop));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Up)), Some(Key::Rotate));

        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('A'))), Some(Key::Left));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('d'))), Some(Key::Right));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('s'))), Some(Key::SoftDrop));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('W'))), Some(Key::Rotate));
    }

    #[test]
    fn test_unmapped_keys_are_filtered() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let ev = KeyEvent::new_with_kind_and_state(
                KeyCode::Left,
                KeyModifiers::NONE,
                kind,
                KeyEventState::NONE,
            );
            assert_eq!(key_from_event(ev), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            key_from_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(Key::Quit)
        );
    }
}
