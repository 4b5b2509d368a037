//! Unified application error type.
//! All modules (config, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Prediction outcomes
    // ---------------------------
    #[error("No data available to make a prediction.")]
    NoData,

    #[error("No valid {0} events found to make a prediction.")]
    NoValidEvents(String),

    #[error("Not enough {0} events to make a prediction (at least 2 are needed).")]
    InsufficientHistory(String),

    #[error("Prediction failed: {0}")]
    Computation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
