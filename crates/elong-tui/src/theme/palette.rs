//! Color palette for the elongator glass theme.
//!
//! Named terminal colors throughout, so the theme inherits whatever the
//! user's terminal scheme does with them.

use ratatui::style::Color;

// Background layers
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Black;

// Borders
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// Accent, carried by the result URL and the submit control
pub const ACCENT: Color = Color::Cyan;

// Text emphasis levels
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// Status
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
