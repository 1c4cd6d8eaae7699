use super::ordinal::ordinal_suffix;
use chrono::{DateTime, Datelike, Local, TimeZone};

/// Build the title of the daily jot note for an instant's calendar date
///
/// Produces `"<Month> <day><suffix>, <year>"` with the English month name,
/// e.g. `"March 3rd, 2024"`. Only the date matters, so two instants on the
/// same calendar day always produce the same title.
pub fn build_daily_title<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let date = instant.date_naive();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Title of today's daily jot in the local time zone
pub fn build_daily_title_today() -> String {
    build_daily_title(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_known_titles() {
        let march = Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap();
        assert_eq!(build_daily_title(&march), "March 3rd, 2024");

        let new_year = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(build_daily_title(&new_year), "January 1st, 2025");

        let eleventh = Utc.with_ymd_and_hms(2024, 11, 11, 8, 30, 0).unwrap();
        assert_eq!(build_daily_title(&eleventh), "November 11th, 2024");
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let morning = Utc.with_ymd_and_hms(2024, 7, 22, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 7, 22, 23, 59, 59).unwrap();
        assert_eq!(build_daily_title(&morning), build_daily_title(&night));
        assert_eq!(build_daily_title(&night), "July 22nd, 2024");
    }
}
