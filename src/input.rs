//! Key mapping for the game screen.
//!
//! Turns crossterm key events into UI-agnostic inputs. Only the four
//! canonical directions ever reach the game controller.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48::Direction;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Move(Direction),
    Restart,
    Quit,  // Esc / q, needs confirmation
    Other, // Any other key (cancels quit_pending)
}

/// Map a key press to a game input. Key releases and repeats count as `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => GameInput::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => GameInput::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => GameInput::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            GameInput::Move(Direction::Right)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Move(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Down)), GameInput::Move(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Left)), GameInput::Move(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Right)), GameInput::Move(Direction::Right));
    }

    #[test]
    fn test_wasd_and_vim_keys() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), GameInput::Move(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Char('a'))), GameInput::Move(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Char('j'))), GameInput::Move(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Char('l'))), GameInput::Move(Direction::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), GameInput::Restart);
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Other);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
