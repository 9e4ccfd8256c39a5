//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::Settings;

/// How long the copy confirmation stays visible after a clipboard write
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_secs(2);

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// URL entry form; also shows the error banner when `error` is set
    #[default]
    Form,

    /// Shorten request in flight
    Loading,

    /// Result panel with the elongated URL and copy control
    Success,
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading State
// ─────────────────────────────────────────────────────────────────────────────

/// Loading messages to cycle through while the request is in flight
const LOADING_MESSAGES: &[&str] = &[
    "Elongating your URL...",
    "Shortening... (just kidding)",
    "Adding characters with intent...",
    "Consulting the length oracle...",
    "Unrolling the hyperlink...",
    "Negotiating with the slash key...",
    "Appending artisanal path segments...",
    "Stretching the address bar...",
    "Teaching your URL to reach the horizon...",
    "Engaging maximum verbosity...",
    "Percent-encoding the unnecessary...",
    "Inflating the query string...",
    "Rerouting through the scenic domain...",
    "Measuring twice, lengthening once...",
    "Buffering extra forward slashes...",
    "Outsourcing brevity...",
    "Compressing nothing, expanding everything...",
    "Asking the server to take its time...",
    "Padding for dramatic effect...",
    "Almost there... adding a few more characters...",
];

/// Loading state for the in-flight shorten request
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick animation frame and cycle message
    ///
    /// Cycles through messages every ~15 ticks (0.75 sec at the 50ms poll rate)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// URL input buffer; kept across a successful submission so the
    /// result panel can show the original address
    pub url_input: String,

    /// Elongated URL returned by the service
    pub result_url: Option<String>,

    /// User-visible reason the last submission failed
    pub error: Option<String>,

    /// Loading animation state, present only while a request is in flight
    pub loading: Option<LoadingState>,

    /// Application settings from config file
    pub settings: Settings,

    /// When the result URL last landed on the clipboard
    pub(crate) copied_at: Option<Instant>,

    /// Flag to quit the application
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Form,
            url_input: String::new(),
            result_url: None,
            error: None,
            loading: None,
            settings,
            copied_at: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────

    /// Whether the submit control is enabled
    ///
    /// Disabled while a request is in flight or when the trimmed input
    /// is empty.
    pub fn can_submit(&self) -> bool {
        self.ui_mode != UiMode::Loading && !self.url_input.trim().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.ui_mode == UiMode::Loading
    }

    /// Enter the loading screen for a fresh request
    ///
    /// Clears any previous result, error, and copy confirmation so the
    /// outcome of the new request is the only one ever shown.
    pub fn start_loading(&mut self) {
        self.ui_mode = UiMode::Loading;
        self.loading = Some(LoadingState::new());
        self.result_url = None;
        self.error = None;
        self.copied_at = None;
    }

    /// Land on the result panel with the service's elongated URL
    pub fn finish_success(&mut self, short_url: String) {
        self.ui_mode = UiMode::Success;
        self.result_url = Some(short_url);
        self.error = None;
        self.loading = None;
    }

    /// Return to the form with an error banner
    pub fn finish_error(&mut self, message: String) {
        self.ui_mode = UiMode::Form;
        self.error = Some(message);
        self.result_url = None;
        self.loading = None;
    }

    /// Clear everything back to an empty form
    pub fn reset(&mut self) {
        self.ui_mode = UiMode::Form;
        self.url_input.clear();
        self.result_url = None;
        self.error = None;
        self.loading = None;
        self.copied_at = None;
    }

    // ─────────────────────────────────────────────────────────────────
    // Copy confirmation
    // ─────────────────────────────────────────────────────────────────

    /// Record a successful clipboard write, restarting the confirmation window
    pub fn record_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Whether the copy control should read as confirmed right now
    pub fn is_copied(&self) -> bool {
        match self.copied_at {
            Some(at) => at.elapsed() < COPY_CONFIRMATION_WINDOW,
            None => false,
        }
    }

    /// Drop the copy confirmation once its window has elapsed
    ///
    /// Called on every tick; a confirmation never outlives the state that
    /// produced it because `start_loading` and `reset` clear it directly.
    pub fn expire_copy_confirmation(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPY_CONFIRMATION_WINDOW {
                self.copied_at = None;
            }
        }
    }

    /// Tick the loading animation, if a request is in flight
    pub fn tick_loading_animation(&mut self) {
        if let Some(loading) = self.loading.as_mut() {
            loading.tick();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
