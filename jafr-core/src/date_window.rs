//! Day windows relative to a caller-supplied "today".
//!
//! A record belongs to a window when one of the window's dates, rendered as
//! `DD/MM/YY`, occurs anywhere in the record's raw line. This is plain
//! substring containment, not a comparison of the parsed due/scheduled field,
//! so a description or time that happens to contain the same characters also
//! matches. Reminders rely on exactly this behaviour.

use chrono::{Duration, NaiveDate};

/// Textual date format used in every store: `DD/MM/YY`.
pub const DATE_FORMAT: &str = "%d/%m/%y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `DD/MM/YY` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// A set of day offsets from today, each pre-rendered in store format.
#[derive(Debug, Clone)]
pub struct DayWindow {
    dates: Vec<String>,
}

impl DayWindow {
    /// Just today (offset 0).
    pub fn today(today: NaiveDate) -> Self {
        DayWindow {
            dates: vec![format_date(today)],
        }
    }

    /// The `days` days after today (offsets `1..=days`), not including today.
    pub fn ahead(today: NaiveDate, days: i64) -> Self {
        let dates = (1..=days)
            .map(|offset| format_date(today + Duration::days(offset)))
            .collect();

        DayWindow { dates }
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(String::as_str)
    }

    /// The earliest window date found anywhere in `line`, if any.
    pub fn find_in<'a>(&'a self, line: &str) -> Option<&'a str> {
        self.dates().find(|date| line.contains(date))
    }

    pub fn matches(&self, line: &str) -> bool {
        self.find_in(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_two_digit_year() {
        assert_eq!(format_date(day(5, 3, 2024)), "05/03/24");
        assert_eq!(parse_date("05/03/24"), Some(day(5, 3, 2024)));
        assert_eq!(parse_date("2024-03-05"), None);
    }

    #[test]
    fn today_window_is_offset_zero_only() {
        let window = DayWindow::today(day(15, 3, 2024));
        assert_eq!(window.dates().collect::<Vec<_>>(), vec!["15/03/24"]);
    }

    #[test]
    fn ahead_window_excludes_today_and_rolls_over_months() {
        let window = DayWindow::ahead(day(30, 3, 2024), 3);
        assert_eq!(
            window.dates().collect::<Vec<_>>(),
            vec!["31/03/24", "01/04/24", "02/04/24"]
        );
        assert!(!window.matches("- x Due: 30/03/24 not complete"));
    }

    #[test]
    fn matching_is_substring_containment() {
        let window = DayWindow::today(day(15, 3, 2024));
        assert!(window.matches("- Pay rent Due: 15/03/24 not complete"));
        // the date only appears in the description, yet it still matches
        assert!(window.matches("- Follow up on 15/03/24 invoice Due: 20/03/24 not complete"));
        assert!(!window.matches("- Pay rent Due: 16/03/24 not complete"));
    }

    #[test]
    fn find_in_returns_first_window_date() {
        let window = DayWindow::ahead(day(15, 3, 2024), 7);
        assert_eq!(
            window.find_in("- Review Scheduled: 10:00 18/03/24"),
            Some("18/03/24")
        );
        assert_eq!(window.find_in("- Review Scheduled: 10:00 25/03/24"), None);
    }
}
