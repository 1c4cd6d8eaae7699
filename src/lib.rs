//! Daily Jot MCP Server Library
//!
//! Journal and agenda helpers for a note-taking host, exposed as Model Context
//! Protocol (MCP) tools.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `JotServerHandler` - Maps MCP tools onto plugin actions
//! - **Action Layer**: `actions` module - Host call sequences built on the pure
//!   `jot` helpers (titles, times, due-today filtering)
//! - **Host Layer**: `host` module - The host contract and a TOML-backed
//!   notebook persisted by `storage`
//!
//! # Example
//!
//! ```no_run
//! use daily_jot::{Config, JotServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = JotServerHandler::new(Config::for_file("jot.toml"))?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod config;
pub mod host;
pub mod jot;
pub mod logging;
mod storage;

use anyhow::Result;
use chrono::Local;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};
use tokio::sync::Mutex;

use actions::{ActionId, InsertContent, JournalEntry, NewNote};
use host::TextFormat;

// Re-export commonly used types
pub use config::{Config, PluginSettings};
pub use host::{Host, NoteHandle, Notebook, TaskRecord};
pub use storage::Storage;

/// MCP Server handler for daily jot actions
///
/// Holds the local notebook behind an async mutex so actions can await host
/// calls while holding it. Every mutating tool saves the notebook afterwards.
pub struct JotServerHandler {
    pub(crate) notebook: Mutex<Notebook>,
    pub(crate) storage: Storage,
    pub(crate) config: Config,
}

impl JotServerHandler {
    /// Create a new handler, loading the notebook named in `config`
    ///
    /// # Example
    /// ```no_run
    /// # use daily_jot::{Config, JotServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = JotServerHandler::new(Config::for_file("jot.toml"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let storage = Storage::new(&config.file);
        let notebook = Mutex::new(storage.load()?);
        Ok(Self {
            notebook,
            storage,
            config,
        })
    }

    /// Save the notebook, reporting failures as tool errors
    fn save(&self, notebook: &Notebook, action: ActionId) -> McpResult<()> {
        if let Err(e) = self.storage.save(notebook) {
            tracing::error!(%action, error = %e, "failed to save notebook");
            bail!("Failed to save: {}", e);
        }
        Ok(())
    }

    fn split_tags(tags: Option<String>, default: &str) -> Vec<String> {
        let tags = config::parse_tag_list(tags.as_deref().unwrap_or_default());
        if tags.is_empty() {
            vec![default.to_string()]
        } else {
            tags
        }
    }
}

/// Daily jot helpers for a note-taking workflow.
///
/// Journal entries go to one note per day titled like "March 3rd, 2024" and tagged
/// `daily-jots` by default. The agenda collects every task starting today, skips
/// notes listed in the "Removed Notes" setting, and publishes them in time order.
#[mcp_server]
impl McpServer for JotServerHandler {
    /// **List actions**: Show every plugin action with its stable id and menu label.
    #[tool]
    async fn list_actions(&self) -> McpResult<String> {
        Ok(actions::format_registry())
    }

    /// **Insert time now**: Write the current time (H:MM, 24-hour) into a note.
    /// Returns the time when there is no note to write into.
    #[tool]
    async fn insert_time_now(
        &self,
        /// Uuid of the note the cursor is in (optional)
        note: Option<String>,
    ) -> McpResult<String> {
        let mut notebook = self.notebook.lock().await;
        notebook.selection = note;

        let result = actions::insert_time_now(&mut *notebook, Local::now()).await;
        notebook.selection = None;

        match result {
            Ok(Some(time)) => Ok(time),
            Ok(None) => {
                self.save(&notebook, ActionId::InsertTimeNow)?;
                Ok("Time inserted".to_string())
            }
            Err(e) => {
                tracing::warn!(action = %ActionId::InsertTimeNow, error = %e, "action failed");
                bail!("{}", e);
            }
        }
    }

    /// **Journal**: Add a bullet to today's daily jot, creating the jot if needed.
    #[tool]
    async fn add_journal_entry(
        &self,
        /// Text of the entry
        text: String,
        /// Prefix the entry with the current time (default: false)
        timestamp: Option<bool>,
        /// Tag of the daily jot (default: configured journal tag, also used when blank)
        tag: Option<String>,
    ) -> McpResult<String> {
        let entry = JournalEntry {
            text,
            timestamp: timestamp.unwrap_or(false),
            tag,
        };

        let mut notebook = self.notebook.lock().await;
        let jot_uuid = match actions::add_journal_entry(
            &mut *notebook,
            entry,
            &self.config.journal_tag,
            Local::now(),
        )
        .await
        {
            Ok(uuid) => uuid,
            Err(e) => {
                tracing::warn!(action = %ActionId::AddJournalEntry, error = %e, "action failed");
                bail!("{}", e);
            }
        };
        self.save(&notebook, ActionId::AddJournalEntry)?;

        Ok(format!("Journal entry added to note {}", jot_uuid))
    }

    /// **Insert content**: Add text to a note, or to a new note.
    /// **Format**: plain (default), bullet, or task.
    #[tool]
    async fn insert_content(
        &self,
        /// Text to add
        text: String,
        /// Format: plain/bullet/task (default: plain)
        format: Option<String>,
        /// Uuid of the target note (optional when creating a new note)
        note: Option<String>,
        /// Name of a new note to create and write to (optional, blank = none)
        new_note_name: Option<String>,
        /// Comma-separated tags for the new note (requires new_note_name)
        new_note_tags: Option<String>,
    ) -> McpResult<String> {
        let format = match format.as_deref().map(str::parse::<TextFormat>) {
            None => TextFormat::Plain,
            Some(Ok(f)) => f,
            Some(Err(e)) => bail!("{}", e),
        };

        let new_note_name = new_note_name.filter(|name| !name.trim().is_empty());
        let has_tags = new_note_tags
            .as_deref()
            .is_some_and(|tags| !tags.trim().is_empty());
        if new_note_name.is_none() && has_tags {
            bail!("Note tags were given without a new note name");
        }

        let request = InsertContent {
            text,
            format,
            note,
            new_note: new_note_name.map(|name| NewNote {
                name,
                tags: new_note_tags,
            }),
        };

        let mut notebook = self.notebook.lock().await;
        let note_uuid = match actions::insert_content(&mut *notebook, request).await {
            Ok(uuid) => uuid,
            Err(e) => {
                tracing::warn!(action = %ActionId::InsertContent, error = %e, "action failed");
                bail!("{}", e);
            }
        };
        self.save(&notebook, ActionId::InsertContent)?;

        Ok(format!("Content added to note {}", note_uuid))
    }

    /// **Publish schedule**: Write today's agenda (tasks starting today, in time order)
    /// to a daily jot. Defaults to today's jot with the configured journal tag.
    #[tool]
    async fn publish_schedule(
        &self,
        /// Name of the jot to publish to (default: today's title, e.g. "March 3rd, 2024")
        name: Option<String>,
        /// Comma-separated tags of the jot (default: configured journal tag)
        tags: Option<String>,
    ) -> McpResult<String> {
        let now = Local::now();
        let name = name.unwrap_or_else(|| jot::build_daily_title(&now));
        let tags = Self::split_tags(tags, &self.config.journal_tag);

        let mut notebook = self.notebook.lock().await;
        let count = match actions::publish_schedule(
            &mut *notebook,
            &name,
            &tags,
            self.config.agenda_format(),
            now,
        )
        .await
        {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(action = %ActionId::PublishSchedule, error = %e, "action failed");
                bail!("{}", e);
            }
        };
        self.save(&notebook, ActionId::PublishSchedule)?;

        Ok(format!("Published {} task(s) to '{}'", count, name))
    }

    /// **Schedule all day**: Move a task's start to midnight and make it last 24 hours.
    #[tool]
    async fn schedule_all_day(
        &self,
        /// Uuid of the task
        task: String,
    ) -> McpResult<String> {
        let mut notebook = self.notebook.lock().await;
        if let Err(e) = actions::schedule_all_day(&mut *notebook, &task, Local::now()).await {
            tracing::warn!(action = %ActionId::ScheduleAllDay, error = %e, "action failed");
            bail!("{}", e);
        }
        self.save(&notebook, ActionId::ScheduleAllDay)?;

        Ok(format!("Task {} scheduled as all day", task))
    }
}
