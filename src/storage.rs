use crate::host::Notebook;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file persistence for a [`Notebook`]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the notebook, or an empty one when the file does not exist yet
    pub fn load(&self) -> Result<Notebook> {
        if !self.file_path.exists() {
            return Ok(Notebook::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let notebook: Notebook = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(notebook)
    }

    pub fn save(&self, notebook: &Notebook) -> Result<()> {
        let content = toml::to_string_pretty(notebook)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TaskRecord;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("jot.toml"));
        let notebook = storage.load().unwrap();
        assert!(notebook.notes.is_empty());
        assert!(notebook.tasks.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        let mut notebook = Notebook::new();
        let uuid = notebook.add_note("Errands", &["home".to_string()]);
        notebook.add_task(TaskRecord {
            uuid: "t1".to_string(),
            content: "Buy milk".to_string(),
            start_at: Some(1_709_456_400),
            end_at: None,
            note_uuid: Some(uuid.clone()),
        });
        notebook
            .settings
            .insert("Removed Notes".to_string(), "a;b".to_string());
        storage.save(&notebook).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.note(&uuid).unwrap().name, "Errands");
        assert_eq!(loaded.task("t1").unwrap().start_at, Some(1_709_456_400));
        assert_eq!(loaded.settings.get("Removed Notes").unwrap(), "a;b");
    }
}
