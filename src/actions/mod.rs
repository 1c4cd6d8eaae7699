//! Plugin actions and their registry
//!
//! Each action is a short sequence of host calls built on the `jot` helpers.
//! Actions are identified by a stable [`ActionId`]; the menu label the host
//! shows is display metadata only.

mod all_day;
mod insert_content;
mod insert_time;
mod journal;
mod publish;

use std::fmt;
use std::str::FromStr;

pub use all_day::schedule_all_day;
pub use insert_content::{InsertContent, NewNote, insert_content};
pub use insert_time::insert_time_now;
pub use journal::{JournalEntry, add_journal_entry, find_or_create_note};
pub use publish::publish_schedule;

/// Host menu an action is offered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Application-wide menu
    App,
    /// Text insertion menu inside the editor
    InsertText,
    /// Menu of a daily jot note
    DailyJot,
    /// Menu of a single task
    Task,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::App => "app",
            Surface::InsertText => "insert_text",
            Surface::DailyJot => "daily_jot",
            Surface::Task => "task",
        }
    }
}

/// Stable identifier of a plugin action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    InsertTimeNow,
    AddJournalEntry,
    InsertContent,
    PublishSchedule,
    ScheduleAllDay,
}

impl ActionId {
    /// Every registered action, in menu order
    pub const ALL: [ActionId; 5] = [
        ActionId::InsertContent,
        ActionId::AddJournalEntry,
        ActionId::InsertTimeNow,
        ActionId::PublishSchedule,
        ActionId::ScheduleAllDay,
    ];

    /// Stable identifier used by callers
    pub fn id(self) -> &'static str {
        match self {
            ActionId::InsertTimeNow => "insert-time-now",
            ActionId::AddJournalEntry => "add-journal-entry",
            ActionId::InsertContent => "insert-content",
            ActionId::PublishSchedule => "publish-schedule",
            ActionId::ScheduleAllDay => "schedule-all-day",
        }
    }

    /// Label shown in the host menu
    pub fn label(self) -> &'static str {
        match self {
            ActionId::InsertTimeNow => "Insert time now",
            ActionId::AddJournalEntry => "Add journal entry to today's jot",
            ActionId::InsertContent => "Insert content inside a note",
            ActionId::PublishSchedule => "Publish schedule to Jot",
            ActionId::ScheduleAllDay => "Schedule task as All Day",
        }
    }

    pub fn surface(self) -> Surface {
        match self {
            ActionId::InsertTimeNow => Surface::InsertText,
            ActionId::AddJournalEntry | ActionId::InsertContent => Surface::App,
            ActionId::PublishSchedule => Surface::DailyJot,
            ActionId::ScheduleAllDay => Surface::Task,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| {
                let ids: Vec<&str> = ActionId::ALL.iter().map(|a| a.id()).collect();
                format!(
                    "Unknown action '{}'. Valid actions are: {}",
                    s,
                    ids.join(", ")
                )
            })
    }
}

/// Render the registry as a listing for callers
pub fn format_registry() -> String {
    let mut result = format!("{} action(s):\n\n", ActionId::ALL.len());
    for action in ActionId::ALL {
        result.push_str(&format!(
            "- [{}] {} (menu: {})\n",
            action.id(),
            action.label(),
            action.surface().as_str()
        ));
    }
    result
}
