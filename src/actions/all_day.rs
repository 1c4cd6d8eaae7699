use crate::host::{Host, TaskUpdate};
use crate::jot::all_day_span;
use anyhow::{Result, bail};
use chrono::{DateTime, Local};

/// Turn a task into an all-day task
///
/// The start moves to local midnight of the task's start date (today when it
/// has none); the end is set 24 hours later once the start has been applied.
pub async fn schedule_all_day<H: Host>(host: &mut H, task_uuid: &str, now: DateTime<Local>) -> Result<()> {
    let Some(task) = host.get_task(task_uuid).await? else {
        bail!("Task '{}' not found", task_uuid);
    };

    if task.start_at.is_none() {
        tracing::debug!(task = %task_uuid, "no start date found, using today");
    }
    let Some(span) = all_day_span(task.start_at, &now) else {
        bail!("Could not resolve local midnight for task '{}'", task_uuid);
    };

    host.update_task(
        &task.uuid,
        TaskUpdate {
            start_at: Some(span.start_at),
            end_at: None,
        },
    )
    .await?;

    let Some(updated) = host.get_task(&task.uuid).await? else {
        bail!("Task '{}' disappeared while updating", task_uuid);
    };
    host.update_task(
        &updated.uuid,
        TaskUpdate {
            start_at: None,
            end_at: Some(span.end_at),
        },
    )
    .await?;

    tracing::debug!(task = %task_uuid, start_at = span.start_at, end_at = span.end_at, "task scheduled as all day");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Notebook, TaskRecord};
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_unknown_task() {
        let mut notebook = Notebook::new();
        let now = Local.with_ymd_and_hms(2024, 3, 3, 9, 0, 0).unwrap();
        assert!(schedule_all_day(&mut notebook, "missing", now).await.is_err());
    }

    #[tokio::test]
    async fn test_sets_midnight_start_and_end() {
        let mut notebook = Notebook::new();
        let start = Local.with_ymd_and_hms(2024, 3, 5, 15, 30, 0).unwrap();
        notebook.add_task(TaskRecord {
            uuid: "t1".to_string(),
            content: "Conference".to_string(),
            start_at: Some(start.timestamp()),
            end_at: None,
            note_uuid: None,
        });

        let now = Local.with_ymd_and_hms(2024, 3, 3, 9, 0, 0).unwrap();
        schedule_all_day(&mut notebook, "t1", now).await.unwrap();

        let midnight = Local.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap().timestamp();
        let task = notebook.task("t1").unwrap();
        assert_eq!(task.start_at, Some(midnight));
        assert_eq!(task.end_at, Some(midnight + 86_400));
    }

    #[tokio::test]
    async fn test_task_without_start_uses_today() {
        let mut notebook = Notebook::new();
        notebook.add_task(TaskRecord {
            uuid: "t1".to_string(),
            content: "Someday".to_string(),
            start_at: None,
            end_at: None,
            note_uuid: None,
        });

        let now = Local.with_ymd_and_hms(2024, 3, 3, 9, 0, 0).unwrap();
        schedule_all_day(&mut notebook, "t1", now).await.unwrap();

        let midnight = Local.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap().timestamp();
        assert_eq!(notebook.task("t1").unwrap().start_at, Some(midnight));
    }
}
