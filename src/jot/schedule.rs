use super::clock::format_agenda_time;
use crate::host::TaskRecord;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use std::collections::HashSet;

/// A task selected for today's agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTodayTask {
    pub content: String,
    /// Start instant in seconds since the Unix epoch, carried over unchanged
    pub start_time: i64,
}

/// Start and end of an all-day task, in seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllDaySpan {
    pub start_at: i64,
    pub end_at: i64,
}

/// Calendar date of a task's start in the given time zone
///
/// Returns `None` when the task has no start or the timestamp is out of range.
fn start_date<Tz: TimeZone>(task: &TaskRecord, tz: &Tz) -> Option<NaiveDate> {
    let start_at = task.start_at?;
    tz.timestamp_opt(start_at, 0)
        .single()
        .map(|dt| dt.date_naive())
}

/// Select the tasks that start on the reference instant's calendar day
///
/// # Arguments
/// * `tasks` - Task records as returned by the host (not modified)
/// * `excluded_note_ids` - Owning notes whose tasks are left out
/// * `reference` - Instant whose calendar date and time zone define "today"
///
/// # Description
/// Both sides of the comparison are calendar dates in the reference's time zone,
/// so this is a same-day test rather than timestamp equality. A task without
/// `start_at` never matches. Input order is preserved; nothing is sorted.
pub fn tasks_due_today<Tz: TimeZone>(
    tasks: &[TaskRecord],
    excluded_note_ids: &HashSet<String>,
    reference: &DateTime<Tz>,
) -> Vec<DueTodayTask> {
    let today = reference.date_naive();
    let tz = reference.timezone();

    tasks
        .iter()
        .filter(|task| start_date(task, &tz) == Some(today))
        .filter(|task| {
            task.note_uuid
                .as_ref()
                .is_none_or(|uuid| !excluded_note_ids.contains(uuid))
        })
        .filter_map(|task| {
            task.start_at.map(|start_time| DueTodayTask {
                content: task.content.clone(),
                start_time,
            })
        })
        .collect()
}

/// Sort agenda tasks by start time, earliest first (stable for equal times)
pub fn sort_by_start_time(tasks: &mut [DueTodayTask]) {
    tasks.sort_by_key(|task| task.start_time);
}

/// Render agenda lines as `**9:05 AM** content`, keeping the given order
pub fn agenda_lines<Tz: TimeZone>(tasks: &[DueTodayTask], tz: &Tz) -> Vec<String>
where
    Tz::Offset: std::fmt::Display,
{
    tasks
        .iter()
        .filter_map(|task| {
            let start = tz.timestamp_opt(task.start_time, 0).single()?;
            Some(format!("**{}** {}", format_agenda_time(&start), task.content))
        })
        .collect()
}

/// Compute the span that turns a task into an all-day task
///
/// The start is midnight of the task's start date in `now`'s time zone, or of
/// `now`'s date when the task has no start yet. The end is 1440 minutes later.
/// Returns `None` when midnight does not exist on that date in the zone.
pub fn all_day_span<Tz: TimeZone>(start_at: Option<i64>, now: &DateTime<Tz>) -> Option<AllDaySpan> {
    let tz = now.timezone();
    let date = match start_at {
        Some(seconds) => tz.timestamp_opt(seconds, 0).single()?.date_naive(),
        None => now.date_naive(),
    };

    let midnight = tz
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    let start_at = midnight.timestamp();

    Some(AllDaySpan {
        start_at,
        end_at: start_at + Duration::minutes(1440).num_seconds(),
    })
}
