use super::insert_content::write_text;
use super::journal::find_or_create_note;
use crate::config::PluginSettings;
use crate::host::{Host, TextFormat};
use crate::jot::{agenda_lines, sort_by_start_time, tasks_due_today};
use anyhow::Result;
use chrono::{DateTime, Local};

/// Publish today's agenda to a daily jot
///
/// # Arguments
/// * `host` - Host to read tasks from and write the agenda to
/// * `jot_name` / `tags` - Daily jot to publish to; created when missing
/// * `format` - How each agenda entry is written (task or bullet)
/// * `now` - Defines "today"
///
/// # Description
/// Tasks starting today are gathered from every task list note, skipping notes
/// listed in the `Removed Notes` setting, and sorted by start time. Entries are
/// inserted last-first at the top of the note, followed by the `# Agenda`
/// heading, so the note reads top-down in time order.
///
/// # Returns
/// The number of tasks published
pub async fn publish_schedule<H: Host>(
    host: &mut H,
    jot_name: &str,
    tags: &[String],
    format: TextFormat,
    now: DateTime<Local>,
) -> Result<usize> {
    let jot_uuid = find_or_create_note(host, jot_name, tags).await?;
    let settings = PluginSettings::from_host(&*host).await?;

    let task_lists = host.task_list_notes().await?;
    tracing::debug!(notes = task_lists.len(), "filtering task lists for tasks due today");

    let mut due = Vec::new();
    for note in &task_lists {
        let tasks = host.note_tasks(&note.uuid).await?;
        due.extend(tasks_due_today(&tasks, &settings.removed_notes, &now));
    }
    sort_by_start_time(&mut due);

    let lines = agenda_lines(&due, &Local);
    for line in lines.iter().rev() {
        write_text(host, &jot_uuid, line, format).await?;
    }
    write_text(host, &jot_uuid, "# Agenda\n", TextFormat::Plain).await?;

    tracing::info!(note = %jot_uuid, tasks = lines.len(), "schedule published");
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REMOVED_NOTES_SETTING;
    use crate::host::{Notebook, TaskRecord};
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 3, hour, minute, 0).unwrap()
    }

    fn task(uuid: &str, content: &str, start: DateTime<Local>, note: &str) -> TaskRecord {
        TaskRecord {
            uuid: uuid.to_string(),
            content: content.to_string(),
            start_at: Some(start.timestamp()),
            end_at: None,
            note_uuid: Some(note.to_string()),
        }
    }

    fn jot_tags() -> Vec<String> {
        vec!["daily-jots".to_string()]
    }

    #[tokio::test]
    async fn test_publishes_sorted_bullets() {
        let mut notebook = Notebook::new();
        let work = notebook.add_note("Work", &[]);
        let home = notebook.add_note("Home", &[]);
        notebook.add_task(task("t1", "Standup", at(14, 0), &work));
        notebook.add_task(task("t2", "Walk dog", at(7, 30), &home));
        notebook.add_task(task("t3", "Tomorrow", at(9, 0) + Duration::days(1), &work));

        let count = publish_schedule(
            &mut notebook,
            "March 3rd, 2024",
            &jot_tags(),
            TextFormat::Bullet,
            at(6, 0),
        )
        .await
        .unwrap();
        assert_eq!(count, 2);

        let jot = notebook
            .notes
            .iter()
            .find(|n| n.name == "March 3rd, 2024")
            .unwrap();
        assert_eq!(
            jot.body,
            "# Agenda\n- **7:30 AM** Walk dog\n- **2:00 PM** Standup"
        );
    }

    #[tokio::test]
    async fn test_removed_notes_are_skipped() {
        let mut notebook = Notebook::new();
        let work = notebook.add_note("Work", &[]);
        let private = notebook.add_note("Private", &[]);
        notebook.add_task(task("t1", "Review", at(10, 0), &work));
        notebook.add_task(task("t2", "Secret", at(11, 0), &private));
        notebook
            .settings
            .insert(REMOVED_NOTES_SETTING.to_string(), private.clone());

        let count = publish_schedule(
            &mut notebook,
            "March 3rd, 2024",
            &jot_tags(),
            TextFormat::Task,
            at(6, 0),
        )
        .await
        .unwrap();
        assert_eq!(count, 1);

        let published: Vec<&str> = notebook
            .tasks
            .iter()
            .filter(|t| t.content.starts_with("**"))
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(published, vec!["**10:00 AM** Review"]);
    }

    #[tokio::test]
    async fn test_empty_day_still_writes_heading() {
        let mut notebook = Notebook::new();
        let count = publish_schedule(
            &mut notebook,
            "March 3rd, 2024",
            &jot_tags(),
            TextFormat::Task,
            at(6, 0),
        )
        .await
        .unwrap();
        assert_eq!(count, 0);
        assert_eq!(notebook.notes[0].body, "# Agenda");
    }
}
