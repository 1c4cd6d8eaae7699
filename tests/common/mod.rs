//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use daily_jot::TaskRecord;

/// Local instant on March 3rd, 2024
pub fn march_third(hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 3, hour, minute, 0).unwrap()
}

/// Create a task record with a start time
pub fn create_test_task(content: &str, start_at: i64, note_uuid: Option<&str>) -> TaskRecord {
    TaskRecord {
        uuid: format!("task-{}", content),
        content: content.to_string(),
        start_at: Some(start_at),
        end_at: None,
        note_uuid: note_uuid.map(str::to_string),
    }
}
