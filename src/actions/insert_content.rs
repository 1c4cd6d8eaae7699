use crate::config::parse_tag_list;
use crate::host::{Host, TextFormat};
use anyhow::{Result, bail};

/// A note to create for an [`InsertContent`] request
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub name: String,
    /// Comma-separated tags, e.g. `"work,ideas"`
    pub tags: Option<String>,
}

/// Text to insert into an existing or a newly created note
#[derive(Debug, Clone, Default)]
pub struct InsertContent {
    pub text: String,
    pub format: TextFormat,
    /// Uuid of the target note
    pub note: Option<String>,
    /// Create a new note instead (takes precedence over `note`)
    pub new_note: Option<NewNote>,
}

/// Write text into a note in the given format
pub(crate) async fn write_text<H: Host>(
    host: &mut H,
    note_uuid: &str,
    text: &str,
    format: TextFormat,
) -> Result<()> {
    match format {
        TextFormat::Task => {
            host.insert_task(note_uuid, text).await?;
        }
        TextFormat::Bullet => host.insert_content(note_uuid, &format!("- {}", text)).await?,
        TextFormat::Plain => host.insert_content(note_uuid, text).await?,
    }
    Ok(())
}

async fn create_note<H: Host>(host: &mut H, new_note: NewNote) -> Result<String> {
    if new_note.name.trim().is_empty() {
        bail!("Note name cannot be empty");
    }

    let tags = parse_tag_list(new_note.tags.as_deref().unwrap_or_default());
    let uuid = host.create_note(&new_note.name, &tags).await?;
    if host.find_note(&uuid).await?.is_none() {
        bail!("Note could not be created");
    }
    Ok(uuid)
}

/// Insert text into a note, creating the note first when requested
///
/// Returns the uuid of the note written to.
pub async fn insert_content<H: Host>(host: &mut H, request: InsertContent) -> Result<String> {
    if request.text.trim().is_empty() {
        bail!("Text field cannot be empty");
    }

    let note_uuid = match (request.new_note, request.note) {
        (Some(new_note), _) => create_note(host, new_note).await?,
        (None, Some(uuid)) => {
            if host.find_note(&uuid).await?.is_none() {
                bail!("Note '{}' not found", uuid);
            }
            uuid
        }
        (None, None) => {
            bail!("Select a note or check the option to create a new one to properly continue")
        }
    };

    write_text(host, &note_uuid, &request.text, request.format).await?;
    tracing::debug!(note = %note_uuid, format = ?request.format, "content inserted");
    Ok(note_uuid)
}
