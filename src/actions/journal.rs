use super::insert_content::write_text;
use crate::config::DEFAULT_JOURNAL_TAG;
use crate::host::{Host, TextFormat};
use crate::jot::{build_daily_title, format_time};
use anyhow::{Result, bail};
use chrono::{DateTime, Local};

/// A journal entry to add to today's jot
#[derive(Debug, Clone, Default)]
pub struct JournalEntry {
    pub text: String,
    /// Prefix the entry with the current time
    pub timestamp: bool,
    /// Tag of the daily jot; blank or missing falls back to the default tag
    pub tag: Option<String>,
}

/// Find a note by name and tags, creating it when it does not exist
///
/// Returns the note's uuid.
pub async fn find_or_create_note<H: Host>(host: &mut H, name: &str, tags: &[String]) -> Result<String> {
    if let Some(note) = host.find_note_by_name(name, tags).await? {
        return Ok(note.uuid);
    }

    tracing::info!(name, ?tags, "note not found, creating it");
    host.create_note(name, tags).await
}

/// Add a bullet entry to the daily jot for `now`'s date
///
/// `default_tag` is used when the entry has no tag or a blank one; a blank
/// `default_tag` falls back to `daily-jots`.
///
/// Returns the uuid of the daily jot the entry was written to.
pub async fn add_journal_entry<H: Host>(
    host: &mut H,
    entry: JournalEntry,
    default_tag: &str,
    now: DateTime<Local>,
) -> Result<String> {
    if entry.text.trim().is_empty() {
        bail!("Text field cannot be empty");
    }

    let tag = entry
        .tag
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| {
            let default_tag = default_tag.trim();
            if default_tag.is_empty() {
                DEFAULT_JOURNAL_TAG.to_string()
            } else {
                default_tag.to_string()
            }
        });
    let title = build_daily_title(&now);
    let jot_uuid = find_or_create_note(host, &title, &[tag]).await?;

    let text = if entry.timestamp {
        format!("**{}** {}", format_time(&now), entry.text)
    } else {
        entry.text
    };
    write_text(host, &jot_uuid, &text, TextFormat::Bullet).await?;

    tracing::debug!(note = %jot_uuid, title = %title, "journal entry added");
    Ok(jot_uuid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Notebook;
    use chrono::TimeZone;

    fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 3, 9, 5, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let mut notebook = Notebook::new();
        let entry = JournalEntry {
            text: "   ".to_string(),
            ..Default::default()
        };
        let err = add_journal_entry(&mut notebook, entry, DEFAULT_JOURNAL_TAG, morning()).await.unwrap_err();
        assert_eq!(err.to_string(), "Text field cannot be empty");
        assert!(notebook.notes.is_empty());
    }

    #[tokio::test]
    async fn test_creates_jot_with_default_tag() {
        let mut notebook = Notebook::new();
        let entry = JournalEntry {
            text: "Slept well".to_string(),
            timestamp: true,
            tag: None,
        };
        let uuid = add_journal_entry(&mut notebook, entry, DEFAULT_JOURNAL_TAG, morning()).await.unwrap();

        let note = notebook.note(&uuid).unwrap();
        assert_eq!(note.name, "March 3rd, 2024");
        assert_eq!(note.tags, vec!["daily-jots".to_string()]);
        assert_eq!(note.body, "- **9:05** Slept well");
    }

    #[tokio::test]
    async fn test_reuses_existing_jot() {
        let mut notebook = Notebook::new();
        let existing = notebook.add_note("March 3rd, 2024", &["journal".to_string()]);

        for text in ["first", "second"] {
            let entry = JournalEntry {
                text: text.to_string(),
                timestamp: false,
                tag: Some("journal".to_string()),
            };
            let uuid = add_journal_entry(&mut notebook, entry, DEFAULT_JOURNAL_TAG, morning()).await.unwrap();
            assert_eq!(uuid, existing);
        }

        assert_eq!(notebook.notes.len(), 1);
        assert_eq!(notebook.note(&existing).unwrap().body, "- second\n- first");
    }

    #[tokio::test]
    async fn test_blank_tag_uses_configured_default() {
        let mut notebook = Notebook::new();
        for tag in [None, Some(String::new()), Some("  ".to_string())] {
            let entry = JournalEntry {
                text: "x".to_string(),
                timestamp: false,
                tag,
            };
            let uuid = add_journal_entry(&mut notebook, entry, "journal", morning())
                .await
                .unwrap();
            assert_eq!(notebook.note(&uuid).unwrap().tags, vec!["journal".to_string()]);
        }
        assert_eq!(notebook.notes.len(), 1);
    }
}
