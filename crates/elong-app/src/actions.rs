//! Action handlers - background task spawning
//!
//! Executes the side effects requested by `handler::update` and reports
//! their outcomes back to the TEA loop as messages.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::clipboard;
use crate::handler::{Task, UpdateAction};
use crate::message::Message;
use elong_api::{ApiClient, FALLBACK_ERROR_MESSAGE};
use elong_core::Error;

/// Execute an action from the update loop
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: ApiClient) {
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, client).await;
            });
        }
    }
}

/// Execute a background task and send the completion message
pub async fn execute_task(task: Task, msg_tx: mpsc::Sender<Message>, client: ApiClient) {
    match task {
        Task::Shorten { url } => {
            info!("submitting url to shorten endpoint: {}", url);

            let msg = match client.shorten(&url).await {
                Ok(response) => Message::ShortenCompleted {
                    short_url: response.short_url,
                },
                Err(err) => Message::ShortenFailed {
                    message: display_message(err),
                },
            };
            let _ = msg_tx.send(msg).await;
        }

        Task::CopyToClipboard { text } => {
            // arboard is synchronous; keep it off the async runtime
            let joined = tokio::task::spawn_blocking(move || clipboard::copy(&text)).await;

            let msg = match joined {
                Ok(Ok(())) => Message::CopyCompleted,
                Ok(Err(err)) => Message::CopyFailed {
                    reason: err.to_string(),
                },
                Err(err) => Message::CopyFailed {
                    reason: err.to_string(),
                },
            };
            let _ = msg_tx.send(msg).await;
        }
    }
}

/// Map a shorten failure to the text shown on the error banner
///
/// The server's own reason is used when it sent one; transport errors,
/// timeouts, and unparseable bodies all collapse to a fixed fallback.
fn display_message(err: Error) -> String {
    match err {
        Error::Api(message) => message,
        other => {
            warn!("shorten request failed: {}", other);
            FALLBACK_ERROR_MESSAGE.to_string()
        }
    }
}
