// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check whether an export target may be written.
///
/// stdin usually carries the chat log, so there is no interactive prompt:
/// an existing file is only replaced with `--force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        info(format!("Overwriting '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "'{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
