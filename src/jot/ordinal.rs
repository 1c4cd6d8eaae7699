/// English ordinal suffix for a day of the month
///
/// 11, 12 and 13 resolve to `"th"` before the last-digit rule is applied.
/// Days outside `1..=31` are not rejected; the same rule is applied to them
/// (`0` → `"th"`, `32` → `"nd"`).
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }

    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_days() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
    }

    #[test]
    fn test_teens_are_th() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
    }

    #[test]
    fn test_twenties_and_thirties() {
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(30), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_out_of_calendar_days_follow_same_rule() {
        assert_eq!(ordinal_suffix(0), "th");
        assert_eq!(ordinal_suffix(32), "nd");
    }
}
