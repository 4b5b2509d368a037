pub mod config;
pub mod init;
pub mod parse;
pub mod predict;

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::io::Read;

/// Read the chat export from `--file`, or from stdin when no file is given.
pub(crate) fn read_input(file: &Option<String>) -> AppResult<String> {
    match file {
        Some(f) => Ok(std::fs::read_to_string(expand_tilde(f))?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
