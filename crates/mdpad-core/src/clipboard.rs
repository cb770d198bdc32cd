//! Clipboard contract

use crate::error::Result;

/// Trait for writing text to the system clipboard (async)
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}
