// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{to_csv, to_json};
use crate::export::model::{RecordExport, get_headers, record_to_row};
use crate::export::notify_export_success;
use crate::models::event_record::EventRecord;
use crate::utils::table::Table;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Render records in the requested format.
    pub fn render(records: &[EventRecord], format: ExportFormat) -> AppResult<String> {
        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Table => Ok(render_table(&rows)),
            ExportFormat::Json => to_json(&rows),
            ExportFormat::Csv => to_csv(&rows),
        }
    }

    /// Render and write to `file`, or print to stdout when no file is given.
    pub fn export(
        records: &[EventRecord],
        format: ExportFormat,
        file: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        let out = Self::render(records, format)?;

        match file {
            Some(path) => {
                ensure_writable(path, force)?;
                fs::write(path, out)?;
                notify_export_success(format.as_str(), path);
            }
            None => print!("{out}"),
        }
        Ok(())
    }
}

/// Preview table of parsed records
pub fn render_table(rows: &[RecordExport]) -> String {
    let mut table = Table::from_headers(&get_headers());
    for r in rows {
        table.add_row(record_to_row(r));
    }
    table.render()
}
