//! Runtime configuration
//!
//! `Config` comes from command-line flags; `PluginSettings` is read from the
//! host's plugin settings each time an action needs it.

use crate::host::{Host, TextFormat};
use anyhow::Result;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

/// Tag given to daily jots when the caller does not pick one
pub const DEFAULT_JOURNAL_TAG: &str = "daily-jots";

/// Host setting listing notes whose tasks stay out of the agenda
pub const REMOVED_NOTES_SETTING: &str = "Removed Notes";

/// Daily jot MCP server - journal entries and agendas for your notes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the notebook data file
    pub file: PathBuf,

    /// Publish agenda entries as bullet points instead of tasks
    #[arg(long)]
    pub format_as_bullet: bool,

    /// Tag used for daily jots when none is given
    #[arg(long, default_value = DEFAULT_JOURNAL_TAG)]
    pub journal_tag: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Configuration for a notebook file with every flag at its default
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            format_as_bullet: false,
            journal_tag: DEFAULT_JOURNAL_TAG.to_string(),
            verbose: false,
        }
    }

    /// Format used for published agenda entries
    pub fn agenda_format(&self) -> TextFormat {
        if self.format_as_bullet {
            TextFormat::Bullet
        } else {
            TextFormat::Task
        }
    }
}

/// Plugin settings stored by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSettings {
    /// Notes whose tasks are never published to the agenda
    pub removed_notes: HashSet<String>,
}

impl PluginSettings {
    /// Read the settings from the host
    pub async fn from_host<H: Host>(host: &H) -> Result<Self> {
        let removed = host.setting(REMOVED_NOTES_SETTING).await?;
        Ok(Self {
            removed_notes: removed.as_deref().map(parse_note_list).unwrap_or_default(),
        })
    }
}

/// Split a `;`-separated list of note uuids, ignoring blanks
pub fn parse_note_list(value: &str) -> HashSet<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a `,`-separated list of tags, ignoring blanks
pub fn parse_tag_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
