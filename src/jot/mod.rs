//! Pure date and text helpers for daily jots
//!
//! Everything in this module is synchronous and side-effect free:
//! - `clock`: 24-hour and agenda time strings
//! - `ordinal`: English ordinal suffixes for days of the month
//! - `title`: daily jot note titles
//! - `schedule`: due-today filtering, agenda lines and all-day spans

mod clock;
mod ordinal;
mod schedule;
mod title;

pub use clock::{format_agenda_time, format_time, format_time_now};
pub use ordinal::ordinal_suffix;
pub use schedule::{
    AllDaySpan, DueTodayTask, agenda_lines, all_day_span, sort_by_start_time, tasks_due_today,
};
pub use title::{build_daily_title, build_daily_title_today};
