//! elong-app - Application state and orchestration for URL Elongator
//!
//! The TEA (The Elm Architecture) side of the program: a state model, a
//! pure update function, and the background tasks that talk to the shorten
//! service and the system clipboard.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, LoadingState, UiMode, COPY_CONFIRMATION_WINDOW};
