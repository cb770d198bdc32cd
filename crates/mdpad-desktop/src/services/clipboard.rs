//! System clipboard via arboard

use mdpad_core::clipboard::Clipboard;
use mdpad_core::{Error, Result};

/// Arboard-based clipboard implementation.
///
/// A handle is opened per write and dropped afterwards. On Linux without a
/// clipboard manager the copied text may not outlive the handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
