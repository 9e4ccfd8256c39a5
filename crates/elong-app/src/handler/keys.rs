//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Form => handle_form_keys(state, key),
        UiMode::Loading => handle_loading_keys(key),
        UiMode::Success => handle_success_keys(key),
    }
}

/// Handle keys on the URL entry form
fn handle_form_keys(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Enter => Some(Message::SubmitRequested),

        // Clear the whole input
        InputKey::CharCtrl('u') => Some(Message::UrlInputChanged {
            text: String::new(),
        }),

        InputKey::Backspace => {
            let mut text = state.url_input.clone();
            text.pop();
            Some(Message::UrlInputChanged { text })
        }

        InputKey::Char(c) => {
            let mut text = state.url_input.clone();
            text.push(c);
            Some(Message::UrlInputChanged { text })
        }

        _ => None,
    }
}

/// Handle keys while a request is in flight
///
/// Editing and submission are disabled; only quitting works.
fn handle_loading_keys(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle keys on the result panel
fn handle_success_keys(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('c') | InputKey::Enter => Some(Message::CopyRequested),

        InputKey::Char('n') | InputKey::Char('r') => Some(Message::ResetForm),

        _ => None,
    }
}
