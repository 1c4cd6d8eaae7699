use chrono::{DateTime, Local, TimeZone, Timelike};

/// Format an instant as a 24-hour `H:MM` string
///
/// The hour carries no leading zero (`0`..`23`), the minute is always two digits.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use daily_jot::jot::format_time;
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 3, 9, 5, 0).unwrap();
/// assert_eq!(format_time(&instant), "9:05");
/// ```
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format!("{}:{:02}", instant.hour(), instant.minute())
}

/// Format the current local time as `H:MM`
pub fn format_time_now() -> String {
    format_time(&Local::now())
}

/// Format an instant the way published agenda lines show it (`9:05 AM`, `12:30 PM`)
pub fn format_agenda_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%-I:%M %p").to_string()
}
