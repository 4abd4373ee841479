//! Shared utility functions for the research computing dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::format::{Item, StrftimeItems};
    use chrono::NaiveDate;
    use std::fmt::Write;

    /// Format used for every date written out by the dashboard (CSV export, month keys).
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format used for month category labels, e.g. "Jan 2023".
    pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Format a date with a caller-supplied strftime string.
    ///
    /// Returns `None` when the format has an unknown specifier or asks for a
    /// field a plain date does not carry (`%H`, `%z`).
    pub fn format_date_with(date: &NaiveDate, format: &str) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(format)).ok()?;
        Some(out)
    }

    /// Whether `format` can render a date.
    pub fn is_date_format(format: &str) -> bool {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return false;
        }
        NaiveDate::from_ymd_opt(2000, 1, 1).is_some_and(|d| format_date_with(&d, format).is_some())
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Parse a month label such as "Jan 2023" into the first day of that month.
    pub fn parse_month_label(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(&format!("01 {}", s.trim()), "%d %b %Y")?)
    }

    /// Month label for a date, e.g. 2023-01-17 -> "Jan 2023".
    pub fn month_label(date: &NaiveDate) -> String {
        date.format(MONTH_LABEL_FORMAT).to_string()
    }

    /// Try every date shape that shows up as a chart category.
    ///
    /// Accepts "YYYY-MM-DD", "YYYYMMDD" and "Mon YYYY". Returns `None` for
    /// anything else (plain month names like "Jan" are not dates).
    pub fn parse_category_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        parse_date(s)
            .or_else(|_| parse_date_compact(s))
            .or_else(|_| parse_month_label(s))
            .ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_format_date_with() {
            let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
            assert_eq!(format_date_with(&date, "%d/%m/%Y").as_deref(), Some("01/03/2023"));
            assert_eq!(format_date_with(&date, "%Q"), None);
            assert_eq!(format_date_with(&date, "%Y %H:%M"), None);
            assert!(is_date_format("%Y-%m-%d"));
            assert!(!is_date_format("%Q"));
            assert!(!is_date_format("%z"));
        }

        #[test]
        fn test_month_label() {
            let date = NaiveDate::from_ymd_opt(2023, 1, 17).unwrap();
            assert_eq!(month_label(&date), "Jan 2023");
            assert_eq!(
                parse_month_label("Jan 2023").unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
            );
        }

        #[test]
        fn test_parse_category_date() {
            let expected = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
            assert_eq!(parse_category_date("2022-02-01"), Some(expected));
            assert_eq!(parse_category_date("20220201"), Some(expected));
            assert_eq!(parse_category_date("Feb 2022"), Some(expected));
            assert_eq!(parse_category_date("Feb"), None);
            assert_eq!(parse_category_date("CF-compute"), None);
        }
    }
}

/// Unit conversions used when turning usage records into chart values.
pub mod units {
    /// Round to a fixed number of decimal places.
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    }

    /// Whole hours in a number of seconds (partial hours are dropped).
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        (seconds / 3600.0).floor()
    }

    /// Gigabytes as a terabyte label, e.g. "2.000 TB".
    pub fn gb_to_tb(gb: f64) -> String {
        format!("{:.3} TB", gb / 1024.0)
    }

    /// Compact duration label such as "1d 2h 5m".
    pub fn format_duration(total_seconds: u64) -> String {
        if total_seconds == 0 {
            return "0".to_string();
        }
        let days = total_seconds / 86_400;
        let remainder = total_seconds % 86_400;
        let hours = remainder / 3_600;
        let minutes = (remainder % 3_600) / 60;

        let mut parts = Vec::new();
        if days > 0 {
            parts.push(format!("{}d", days));
        }
        if hours > 0 {
            parts.push(format!("{}h", hours));
        }
        if minutes > 0 {
            parts.push(format!("{}m", minutes));
        }
        parts.join(" ")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_seconds_to_hours_floors() {
            assert_eq!(seconds_to_hours(7_199.0), 1.0);
            assert_eq!(seconds_to_hours(7_200.0), 2.0);
            assert_eq!(seconds_to_hours(0.0), 0.0);
        }

        #[test]
        fn test_gb_to_tb() {
            assert_eq!(gb_to_tb(2048.0), "2.000 TB");
        }

        #[test]
        fn test_format_duration() {
            assert_eq!(format_duration(0), "0");
            assert_eq!(format_duration(90_061), "1d 1h 1m");
            assert_eq!(format_duration(3_600), "1h");
            assert_eq!(format_duration(59), "");
        }
    }
}
