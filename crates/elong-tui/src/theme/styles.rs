//! Semantic style builders for the elongator theme.
//!
//! Widgets never name colors directly; they ask for a role (primary text,
//! accent, error) and the palette decides what that looks like.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

// --- Text ---
pub fn text_primary() -> Style {
    fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    fg(palette::TEXT_MUTED)
}

// --- Accent ---
pub fn accent() -> Style {
    fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

// --- Status ---
pub fn success_bold() -> Style {
    fg(palette::STATUS_GREEN).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    fg(palette::STATUS_RED)
}

/// Key names in hint lines ("c Copy", "Esc Quit").
pub fn keybinding() -> Style {
    fg(palette::STATUS_YELLOW)
}

// --- Blocks ---

/// Rounded panel border; focus brightens it.
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fg(border))
}
