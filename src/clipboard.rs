//! System clipboard hand-off.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Put `text` on the system clipboard.
pub fn copy(text: &str) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())?;

    // Some backends only take ownership once the contents are read back.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
