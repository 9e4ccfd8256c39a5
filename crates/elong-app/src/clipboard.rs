//! System clipboard access

use elong_core::{Error, Result};

/// Copy text to the system clipboard
///
/// Clipboard failures are recoverable: callers log them and the copy
/// control simply stays unconfirmed.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| Error::clipboard(format!("failed to open clipboard: {e}")))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::clipboard(format!("failed to write clipboard: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_never_panics() {
        // Headless CI has no clipboard; both outcomes are acceptable
        let result = copy("http://localhost:3000/r/abc");
        if let Err(err) = result {
            assert!(err.is_recoverable());
        }
    }
}
