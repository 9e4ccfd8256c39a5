//! Keyboard input abstraction.
//!
//! `InputKey` is the vocabulary the update loop speaks. The TUI converts
//! crossterm key events into it at the boundary, so this crate never
//! depends on a terminal library and the handlers can be driven from
//! tests with plain values.
//!
//! The set is deliberately small: URL entry needs printable characters
//! and a few control keys, nothing more.

/// A key press, as seen by the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, shifted or not.
    Char(char),
    /// Character pressed together with Ctrl.
    CharCtrl(char),
    Enter,
    Esc,
    Backspace,
}
