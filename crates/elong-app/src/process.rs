//! Drains one message and its follow-ups through the update function,
//! spawning background work for any action that comes back.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use elong_api::ApiClient;

/// Feed a message (and the chain of follow-ups it produces) to [`handler::update`].
///
/// `update` stays pure; side effects come out as actions and are
/// dispatched here, where the channel and HTTP client live.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &ApiClient,
) {
    let mut next = Some(message);
    while let Some(message) = next {
        let result = handler::update(state, message);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        next = result.message;
    }
}
