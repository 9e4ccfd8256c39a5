//! Everything the update loop can be told (TEA pattern)

use crate::input_key::InputKey;

/// Every event the application reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Key press, already mapped to the app's input vocabulary
    Key(InputKey),

    /// Tick event for periodic updates (spinner, copy-confirmation expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────
    /// Replace the URL input buffer with new contents
    UrlInputChanged { text: String },

    /// Submit the current input to the shorten endpoint
    SubmitRequested,

    /// Clear the view back to an empty form
    ResetForm,

    // ─────────────────────────────────────────────────────────────────
    // Shorten request completion
    // ─────────────────────────────────────────────────────────────────
    /// The service answered with an elongated URL
    ShortenCompleted { short_url: String },

    /// The request failed; `message` is ready for display
    ShortenFailed { message: String },

    // ─────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────
    /// Copy the result URL to the system clipboard
    CopyRequested,

    /// Clipboard write finished
    CopyCompleted,

    /// Clipboard write failed; logged, never shown to the user
    CopyFailed { reason: String },
}
