use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse {
        file,
        format,
        out,
        limit,
        force,
    } = cmd
    {
        let text = read_input(file)?;
        let mut records = Core::parse(&text, cfg)?;

        if records.is_empty() {
            warning("No events recognised in the input.");
            return Ok(());
        }

        if let Some(n) = limit {
            records.truncate(*n);
        }

        let out = out.as_deref().map(expand_tilde);
        ExportLogic::export(&records, *format, out.as_deref(), *force)?;
    }
    Ok(())
}
