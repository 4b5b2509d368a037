use crate::config::Config;
use crate::core::merge::{merge_outcomes, stale_warning};
use crate::core::parser::LogParser;
use crate::core::predictor::Predictor;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::models::event_record::EventRecord;
use crate::models::prediction::{Forecast, Outcome};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Parse a chat export with the configured vocabulary.
    pub fn parse(text: &str, cfg: &Config) -> AppResult<Vec<EventRecord>> {
        Ok(LogParser::new(&cfg.vocabulary)?.parse(text))
    }

    /// Forecast every tracked kind and merge near-simultaneous results.
    ///
    /// Never fails: per-kind problems become `Outcome::Failed` with a readable message.
    pub fn forecast(
        records: &[EventRecord],
        cfg: &Config,
        now: NaiveDateTime,
        seed: u64,
    ) -> Forecast {
        let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, seed);

        let outcomes: Vec<Outcome> = EventKind::ALL
            .iter()
            .map(|&kind| match predictor.predict(records, kind, now) {
                Ok(p) => Outcome::Predicted(p),
                Err(e) => {
                    log::info!("no {} prediction: {}", kind.ek_as_str(), e);
                    Outcome::Failed {
                        kind,
                        message: e.to_string(),
                    }
                }
            })
            .collect();

        // latest contributing record per kind, failed predictions included
        let latest: Vec<(EventKind, NaiveDateTime)> = EventKind::ALL
            .iter()
            .filter_map(|&kind| {
                predictor
                    .series(records, kind)
                    .iter()
                    .map(|r| r.timestamp())
                    .max()
                    .map(|ts| (kind, ts))
            })
            .collect();

        let stale_warning = stale_warning(&latest, now, cfg.predictor.merge_stale_after_minutes);
        let (outcomes, combined) =
            merge_outcomes(outcomes, cfg.predictor.merge_window_minutes, now);

        Forecast {
            outcomes,
            combined,
            stale_warning,
        }
    }

    /// Full cycle: raw text in, parsed records and forecast out.
    pub fn run_cycle(
        text: &str,
        cfg: &Config,
        now: NaiveDateTime,
        seed: u64,
    ) -> AppResult<(Vec<EventRecord>, Forecast)> {
        let records = Self::parse(text, cfg)?;
        let forecast = Self::forecast(&records, cfg, now, seed);
        Ok((records, forecast))
    }
}
