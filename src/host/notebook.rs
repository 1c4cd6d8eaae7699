use super::{Host, NoteHandle, TaskRecord, TaskUpdate};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A note stored in a [`Notebook`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub uuid: String,
    pub name: String,
    pub tags: Vec<String>,
    /// Markdown body, newest insertions first
    pub body: String,
}

impl Note {
    fn handle(&self) -> NoteHandle {
        NoteHandle {
            uuid: self.uuid.clone(),
            name: self.name.clone(),
            tags: self.tags.clone(),
        }
    }

    fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }

    fn prepend(&mut self, text: &str) {
        let text = text.trim_end_matches('\n');
        if self.body.is_empty() {
            self.body = text.to_string();
        } else {
            self.body = format!("{}\n{}", text, self.body);
        }
    }
}

/// Local host holding notes, tasks and settings
///
/// Serialized as a single TOML document by [`crate::Storage`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Notebook {
    /// Note the editor selection sits in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    /// Plugin settings, e.g. `"Removed Notes"`
    pub settings: BTreeMap<String, String>,
    pub notes: Vec<Note>,
    pub tasks: Vec<TaskRecord>,
}

impl Notebook {
    /// Create an empty notebook
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a note by uuid
    pub fn note(&self, uuid: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.uuid == uuid)
    }

    fn note_mut(&mut self, uuid: &str) -> Result<&mut Note> {
        match self.notes.iter_mut().find(|n| n.uuid == uuid) {
            Some(note) => Ok(note),
            None => bail!("Note '{}' not found", uuid),
        }
    }

    /// Find a task by uuid
    pub fn task(&self, uuid: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.uuid == uuid)
    }

    /// Add a note and return its uuid
    pub fn add_note(&mut self, name: &str, tags: &[String]) -> String {
        let uuid = Uuid::new_v4().to_string();
        self.notes.push(Note {
            uuid: uuid.clone(),
            name: name.to_string(),
            tags: tags.to_vec(),
            body: String::new(),
        });
        uuid
    }

    /// Add a task record as-is, appended after the existing tasks
    pub fn add_task(&mut self, task: TaskRecord) {
        self.tasks.push(task);
    }
}

impl Host for Notebook {
    async fn find_note_by_name(&self, name: &str, tags: &[String]) -> Result<Option<NoteHandle>> {
        Ok(self
            .notes
            .iter()
            .find(|n| n.name == name && n.has_tags(tags))
            .map(Note::handle))
    }

    async fn find_note(&self, uuid: &str) -> Result<Option<NoteHandle>> {
        Ok(self.note(uuid).map(Note::handle))
    }

    async fn create_note(&mut self, name: &str, tags: &[String]) -> Result<String> {
        Ok(self.add_note(name, tags))
    }

    async fn task_list_notes(&self) -> Result<Vec<NoteHandle>> {
        Ok(self
            .notes
            .iter()
            .filter(|n| {
                self.tasks
                    .iter()
                    .any(|t| t.note_uuid.as_deref() == Some(n.uuid.as_str()))
            })
            .map(Note::handle)
            .collect())
    }

    async fn note_tasks(&self, note_uuid: &str) -> Result<Vec<TaskRecord>> {
        if self.note(note_uuid).is_none() {
            bail!("Note '{}' not found", note_uuid);
        }
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.note_uuid.as_deref() == Some(note_uuid))
            .cloned()
            .collect())
    }

    async fn insert_content(&mut self, note_uuid: &str, text: &str) -> Result<()> {
        self.note_mut(note_uuid)?.prepend(text);
        Ok(())
    }

    async fn insert_task(&mut self, note_uuid: &str, content: &str) -> Result<String> {
        self.note_mut(note_uuid)?.prepend(&format!("- [ ] {}", content));

        let uuid = Uuid::new_v4().to_string();
        self.tasks.insert(
            0,
            TaskRecord {
                uuid: uuid.clone(),
                content: content.to_string(),
                start_at: None,
                end_at: None,
                note_uuid: Some(note_uuid.to_string()),
            },
        );
        Ok(uuid)
    }

    async fn get_task(&self, uuid: &str) -> Result<Option<TaskRecord>> {
        Ok(self.task(uuid).cloned())
    }

    async fn update_task(&mut self, uuid: &str, update: TaskUpdate) -> Result<()> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.uuid == uuid) else {
            bail!("Task '{}' not found", uuid);
        };

        if let Some(start_at) = update.start_at {
            task.start_at = Some(start_at);
        }
        if let Some(end_at) = update.end_at {
            task.end_at = Some(end_at);
        }
        Ok(())
    }

    async fn replace_selection(&mut self, text: &str) -> Result<bool> {
        let Some(uuid) = self.selection.clone() else {
            return Ok(false);
        };
        match self.notes.iter_mut().find(|n| n.uuid == uuid) {
            Some(note) => {
                note.prepend(text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn setting(&self, name: &str) -> Result<Option<String>> {
        Ok(self.settings.get(name).cloned())
    }
}
