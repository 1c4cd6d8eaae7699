use crate::host::Host;
use crate::jot::format_time;
use anyhow::Result;
use chrono::{DateTime, Local};

/// Replace the editor selection with a bold timestamp
///
/// Writes `**H:MM** |&nbsp;` over the selection. Returns `None` when the host
/// accepted the replacement, otherwise the bare `H:MM` so the caller can
/// insert it itself.
pub async fn insert_time_now<H: Host>(host: &mut H, now: DateTime<Local>) -> Result<Option<String>> {
    let text = format_time(&now);
    let replaced = host
        .replace_selection(&format!("**{}** |&nbsp;", text))
        .await?;

    if replaced {
        tracing::debug!(time = %text, "replaced selection with time");
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
