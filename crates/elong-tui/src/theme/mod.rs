//! Theme for the elongator TUI: one palette, semantic styles on top.

pub mod palette;
pub mod styles;
