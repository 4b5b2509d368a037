// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;

pub(crate) fn to_json(rows: &[RecordExport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub(crate) fn to_csv(rows: &[RecordExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
