//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::keys::handle_key;
use super::{Task, UpdateAction, UpdateResult};

/// Process a message and update state
///
/// Returns an optional follow-up message and/or an action for the event
/// loop to perform (e.g. spawn the shorten request).
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_loading_animation();
            state.expire_copy_confirmation();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────────
        Message::UrlInputChanged { text } => {
            // Editing is disabled while a request is in flight
            if !state.is_loading() {
                state.url_input = text;
            }
            UpdateResult::none()
        }

        Message::SubmitRequested => handle_submit(state),

        Message::ResetForm => {
            state.reset();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────────
        // Shorten request completion
        // ─────────────────────────────────────────────────────────────
        Message::ShortenCompleted { short_url } => {
            if state.is_loading() {
                debug!("shorten request completed: {}", short_url);
                state.finish_success(short_url);
            } else {
                warn!("dropping shorten result, no request in flight");
            }
            UpdateResult::none()
        }

        Message::ShortenFailed { message } => {
            if state.is_loading() {
                debug!("shorten request failed: {}", message);
                state.finish_error(message);
            } else {
                warn!("dropping shorten failure, no request in flight");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────────────
        Message::CopyRequested => handle_copy(state),

        Message::CopyCompleted => {
            state.record_copied();
            UpdateResult::none()
        }

        Message::CopyFailed { reason } => {
            // Logged only; the copy control simply stays unconfirmed
            warn!("clipboard write failed: {}", reason);
            UpdateResult::none()
        }
    }
}

/// Start a shorten request for the current input
///
/// Ignored while a request is already in flight or when the trimmed
/// input is empty, mirroring the disabled submit control.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.can_submit() {
        return UpdateResult::none();
    }

    let url = state.url_input.trim().to_string();
    state.start_loading();

    UpdateResult::action(UpdateAction::SpawnTask(Task::Shorten { url }))
}

/// Start a clipboard write for the result URL, if one exists
fn handle_copy(state: &AppState) -> UpdateResult {
    let Some(text) = state.result_url.clone() else {
        return UpdateResult::none();
    };

    if state.ui_mode != UiMode::Success {
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::SpawnTask(Task::CopyToClipboard { text }))
}
