//! Key mapping from terminal events to engine input events.

use crate::types::{GameAction, HeldDir};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to its one-shot game action.
pub fn key_down_action(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Map a key release to the held direction it ends, if any.
pub fn key_up_direction(code: KeyCode) -> Option<HeldDir> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(HeldDir::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(HeldDir::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(HeldDir::Down),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char('J'))),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotate_and_action_keys() {
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(
            key_down_action(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
    }

    #[test]
    fn test_release_mapping() {
        assert_eq!(key_up_direction(KeyCode::Left), Some(HeldDir::Left));
        assert_eq!(key_up_direction(KeyCode::Char('l')), Some(HeldDir::Right));
        assert_eq!(key_up_direction(KeyCode::Down), Some(HeldDir::Down));

        // Non-movement keys have no held state to clear.
        assert_eq!(key_up_direction(KeyCode::Up), None);
        assert_eq!(key_up_direction(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
