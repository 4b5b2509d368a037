use super::location::Location;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One bathroom event as read from a chat export line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub label: String,
    pub location: Location,
}

impl EventRecord {
    pub fn new(date: NaiveDate, time: NaiveTime, label: String, location: Location) -> Self {
        Self {
            date,
            time,
            label,
            location,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Chronological sort key
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
