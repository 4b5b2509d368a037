use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_all(custom.as_deref(), cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
