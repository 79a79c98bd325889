use arboard::Clipboard;

use atelier_error::{AtelierError, Result};

/// Push text onto the system clipboard. Best effort: callers surface the
/// error as a status message and move on.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AtelierError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| AtelierError::Clipboard(e.to_string()))
}
