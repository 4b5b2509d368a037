use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Date layouts seen in chat exports.
const LONG_YEAR_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d.%m.%Y", "%Y-%m-%d"];
const SHORT_YEAR_FORMATS: [&str; 2] = ["%d/%m/%y", "%d.%m.%y"];

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse the date header of a chat line (`18/12/2023`, `[18.12.23`, ...)
pub fn parse_chat_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_start_matches('[').trim_end_matches(']').trim();

    // "%Y" would read "23" as year 23, so pick the family by the year width.
    let short_year = s.rsplit(['/', '.']).next().is_some_and(|y| y.len() == 2);
    let formats: &[&str] = if short_year {
        &SHORT_YEAR_FORMATS
    } else {
        &LONG_YEAR_FORMATS
    };

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse `YYYY-MM-DD HH:MM` (as accepted by `--now`)
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
