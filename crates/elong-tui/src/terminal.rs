//! Panic handling for the alternate screen

use elong_core::prelude::*;

/// Install a panic hook that restores the terminal before printing the panic
///
/// The panic also goes to the log file; the alternate screen is gone by
/// the time anyone can read stderr.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("panic: {}", panic_info);
        ratatui::restore();
        original_hook(panic_info);
    }));
}
