// src/export/model.rs

use crate::models::event_record::EventRecord;
use serde::Serialize;

/// Flat row for exporting parsed records.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub date: String,
    pub time: String,
    pub label: String,
    pub location: String,
}

impl From<&EventRecord> for RecordExport {
    fn from(r: &EventRecord) -> Self {
        Self {
            date: r.date_str(),
            time: r.time_str(),
            label: r.label.clone(),
            location: r.location.to_string(),
        }
    }
}

/// Header for CSV and the table preview
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "time", "label", "location"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.time.clone(),
        r.label.clone(),
        r.location.clone(),
    ]
}
