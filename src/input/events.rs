//! Input events consumed by the focus loop.
//!
//! The set is closed: a resize, or a key that is either one of the named
//! control keys or a printable character. Anything else the terminal
//! reports (mouse, focus, paste, key releases) is dropped at conversion.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
};

/// A key the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    BackTab,
    Up,
    Down,
    Escape,
    Enter,
    Char(char),
}

/// Unified event type for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    Key(Key),
}

// =============================================================================
// CROSSTERM CONVERSION
// =============================================================================

/// Convert a crossterm event, dropping kinds the picker ignores.
pub fn convert_event(event: CrosstermEvent) -> Option<InputEvent> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key).map(InputEvent::Key),
        CrosstermEvent::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

/// Convert a crossterm key press.
///
/// Ctrl+C maps to Escape: raw mode swallows the interrupt signal.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') if ctrl => Key::Escape,
        KeyCode::Char(_) if ctrl || event.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(convert_key_event(press(KeyCode::Tab, none)), Some(Key::Tab));
        assert_eq!(convert_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Key::BackTab));
        assert_eq!(convert_key_event(press(KeyCode::Tab, KeyModifiers::SHIFT)), Some(Key::BackTab));
        assert_eq!(convert_key_event(press(KeyCode::Up, none)), Some(Key::Up));
        assert_eq!(convert_key_event(press(KeyCode::Down, none)), Some(Key::Down));
        assert_eq!(convert_key_event(press(KeyCode::Esc, none)), Some(Key::Escape));
        assert_eq!(convert_key_event(press(KeyCode::Enter, none)), Some(Key::Enter));
    }

    #[test]
    fn test_printable_chars() {
        assert_eq!(convert_key_event(press(KeyCode::Char('7'), KeyModifiers::NONE)), Some(Key::Char('7')));
        assert_eq!(convert_key_event(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)), Some(Key::Char('Q')));
    }

    #[test]
    fn test_ctrl_c_is_escape() {
        assert_eq!(convert_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Key::Escape));
        assert_eq!(convert_key_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_release_is_dropped() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(convert_key_event(event), None);
    }

    #[test]
    fn test_other_events_are_dropped() {
        assert_eq!(convert_event(CrosstermEvent::Resize(80, 24)), Some(InputEvent::Resize(80, 24)));
        assert_eq!(convert_event(CrosstermEvent::FocusGained), None);
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(convert_event(CrosstermEvent::Mouse(mouse)), None);
        assert_eq!(convert_key_event(press(KeyCode::Left, KeyModifiers::NONE)), None);
    }
}
