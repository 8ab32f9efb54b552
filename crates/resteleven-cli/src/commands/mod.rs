pub mod config;
pub mod entry;
pub mod pattern;
pub mod suggest;

use chrono::{NaiveDate, NaiveTime, Weekday};

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: '{value}'. Use YYYY-MM-DD"))
}

/// Parse an `HH:MM` (or `HH:MM:SS`) time argument.
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time: '{value}'. Use HH:MM"))
}

/// Parse a weekday as 0-6 (Monday = 0) or its English name.
pub fn parse_day(value: &str) -> Result<Weekday, String> {
    let lower = value.to_lowercase();
    let day = match lower.as_str() {
        "0" | "mon" | "monday" => Weekday::Mon,
        "1" | "tue" | "tuesday" => Weekday::Tue,
        "2" | "wed" | "wednesday" => Weekday::Wed,
        "3" | "thu" | "thursday" => Weekday::Thu,
        "4" | "fri" | "friday" => Weekday::Fri,
        "5" | "sat" | "saturday" => Weekday::Sat,
        "6" | "sun" | "sunday" => Weekday::Sun,
        _ => {
            return Err(format!(
                "Invalid day: '{value}'. Use 0-6 or mon/tue/wed/thu/fri/sat/sun"
            ))
        }
    };
    Ok(day)
}
