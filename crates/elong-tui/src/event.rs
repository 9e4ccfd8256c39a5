//! Terminal event polling
//!
//! The loop wakes every 50ms. A timeout becomes `Message::Tick`, which
//! drives the spinner and the copy-confirmation expiry; a key press maps
//! onto the small `InputKey` vocabulary the form understands.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use elong_app::message::Message;
use elong_app::InputKey;
use elong_core::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Poll for the next terminal event, producing a `Tick` on timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key).map(Message::Key)),
        // Releases, repeats, resize and mouse events carry no meaning here
        _ => Ok(None),
    }
}

/// Map a crossterm key press onto the form's input vocabulary
///
/// URL entry only needs printable characters plus a handful of control
/// keys; anything else is dropped.
fn map_key(key: KeyEvent) -> Option<InputKey> {
    match (key.code, key.modifiers) {
        (KeyCode::Char(c), m) if m.contains(KeyModifiers::CONTROL) => Some(InputKey::CharCtrl(c)),
        (KeyCode::Char(c), _) => Some(InputKey::Char(c)),
        (KeyCode::Enter, _) => Some(InputKey::Enter),
        (KeyCode::Esc, _) => Some(InputKey::Esc),
        (KeyCode::Backspace, _) => Some(InputKey::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_printable_chars_map_to_char() {
        assert_eq!(
            map_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputKey::Char('a'))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(InputKey::Char('R'))
        );
    }

    #[test]
    fn test_url_punctuation_maps_to_char() {
        for c in ['/', ':', '.', '?', '=', '&', '-', '~'] {
            assert_eq!(
                map_key(press(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(InputKey::Char(c))
            );
        }
    }

    #[test]
    fn test_ctrl_chords_map_to_char_ctrl() {
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputKey::CharCtrl('c'))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(InputKey::CharCtrl('u'))
        );
    }

    #[test]
    fn test_editing_and_action_keys() {
        assert_eq!(
            map_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            map_key(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_keys_outside_the_vocabulary_are_dropped() {
        for code in [
            KeyCode::Insert,
            KeyCode::Tab,
            KeyCode::F(5),
            KeyCode::PageUp,
            KeyCode::Up,
        ] {
            assert_eq!(map_key(press(code, KeyModifiers::NONE)), None);
        }
    }
}
