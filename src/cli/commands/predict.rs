use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{RecordExport, render_table};
use crate::models::prediction::{Forecast, Outcome};
use crate::ui::messages::{forecast, header, warning};
use crate::utils::colors::{color_for_staleness, colorize};
use crate::utils::date;
use crate::utils::formatting::{format_combined, format_outcome};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Predict {
        file,
        now,
        seed,
        json,
        no_preview,
    } = cmd
    {
        let now = match now {
            Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::now(),
        };
        let seed = seed.unwrap_or(cfg.seed);

        let text = read_input(file)?;
        let (records, result) = Core::run_cycle(&text, cfg, now, seed)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if !*no_preview && !records.is_empty() {
            header(format!("Parsed {} events", records.len()));
            let preview: Vec<RecordExport> = records
                .iter()
                .take(cfg.preview_rows)
                .map(RecordExport::from)
                .collect();
            print!("{}", render_table(&preview));
            println!();
        }

        print_forecast(&result);
    }
    Ok(())
}

fn print_forecast(result: &Forecast) {
    header("Forecast");

    if let Some(c) = &result.combined {
        forecast(colorize(&format_combined(c), color_for_staleness(c.is_stale)));
    }

    for o in &result.outcomes {
        match o {
            Outcome::Predicted(p) => {
                forecast(colorize(&format_outcome(o), color_for_staleness(p.is_stale)))
            }
            Outcome::Failed { .. } => warning(format_outcome(o)),
        }
    }

    if let Some(w) = &result.stale_warning {
        warning(w);
    }
}
