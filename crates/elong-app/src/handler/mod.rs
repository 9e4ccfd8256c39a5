//! TEA update layer: messages in, state changes and follow-up work out
//!
//! `update` is the only place state changes. It never performs IO itself;
//! side effects come back as an [`UpdateAction`] for the event loop to
//! dispatch.

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

pub use update::update;

/// Work the event loop performs after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run a [`Task`] off the update thread
    SpawnTask(Task),
}

/// Background tasks, executed on the tokio runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// POST a URL to the shorten endpoint
    Shorten { url: String },

    /// Write the result URL to the system clipboard
    CopyToClipboard { text: String },
}

/// What `update` decided: an optional follow-up message to feed back
/// into the loop, and an optional action to dispatch
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
