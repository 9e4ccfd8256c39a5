//! # elong-tui
//!
//! Ratatui front end for URL Elongator: terminal setup, event polling,
//! widgets and rendering, plus the event loop that drives the TEA state
//! machine from elong-app. [`run`] is the only entry point callers need.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use runner::run;
