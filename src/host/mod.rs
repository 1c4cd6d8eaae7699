//! Contract with the note-taking host
//!
//! The host owns notes, tasks, settings and the editor selection. Actions only
//! talk to it through the [`Host`] trait; [`Notebook`] is a TOML-backed host
//! used by the server binary and tests.

mod notebook;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::str::FromStr;

pub use notebook::{Note, Notebook};

/// A note as seen through the host contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteHandle {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A host task record
///
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub uuid: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_uuid: Option<String>,
}

/// Fields to change on a task; `None` leaves the field untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub start_at: Option<i64>,
    pub end_at: Option<i64>,
}

/// How text is written into a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Inserted as-is
    #[default]
    Plain,
    /// Prefixed with `- `
    Bullet,
    /// Inserted as a new task
    Task,
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(TextFormat::Plain),
            "bullet" => Ok(TextFormat::Bullet),
            "task" => Ok(TextFormat::Task),
            _ => Err(format!(
                "Invalid format '{}'. Valid options are: plain, bullet, task",
                s
            )),
        }
    }
}

/// Operations the host provides to actions
///
/// Every call may suspend; actions await them one at a time.
pub trait Host: Send + Sync {
    /// Find a note by exact name that carries every tag in `tags`
    fn find_note_by_name(
        &self,
        name: &str,
        tags: &[String],
    ) -> impl Future<Output = Result<Option<NoteHandle>>> + Send;

    /// Find a note by uuid
    fn find_note(&self, uuid: &str) -> impl Future<Output = Result<Option<NoteHandle>>> + Send;

    /// Create a note and return its uuid
    fn create_note(
        &mut self,
        name: &str,
        tags: &[String],
    ) -> impl Future<Output = Result<String>> + Send;

    /// Notes that own at least one task
    fn task_list_notes(&self) -> impl Future<Output = Result<Vec<NoteHandle>>> + Send;

    /// Tasks owned by a note, in note order
    fn note_tasks(&self, note_uuid: &str) -> impl Future<Output = Result<Vec<TaskRecord>>> + Send;

    /// Insert text at the top of a note
    fn insert_content(
        &mut self,
        note_uuid: &str,
        text: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Insert a new task at the top of a note and return its uuid
    fn insert_task(
        &mut self,
        note_uuid: &str,
        content: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Look up a task by uuid
    fn get_task(&self, uuid: &str) -> impl Future<Output = Result<Option<TaskRecord>>> + Send;

    /// Apply an update to a task
    fn update_task(
        &mut self,
        uuid: &str,
        update: TaskUpdate,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Replace the editor selection; `false` when there is nothing to replace
    fn replace_selection(&mut self, text: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Read a plugin setting
    fn setting(&self, name: &str) -> impl Future<Output = Result<Option<String>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_from_str() {
        assert_eq!("plain".parse::<TextFormat>().unwrap(), TextFormat::Plain);
        assert_eq!("bullet".parse::<TextFormat>().unwrap(), TextFormat::Bullet);
        assert_eq!("task".parse::<TextFormat>().unwrap(), TextFormat::Task);
        assert!("heading".parse::<TextFormat>().is_err());
    }
}
