// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::{ExportLogic, render_table};
pub use model::RecordExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Table,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Table => "table",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
