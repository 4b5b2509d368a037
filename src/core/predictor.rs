//! Next-event forecaster for one tracked kind.

use crate::config::{PredictorConfig, Vocabulary};
use crate::core::calculator::ensemble;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::event_record::EventRecord;
use crate::models::location::Location;
use crate::models::prediction::Prediction;
use crate::utils::time::{add_minutes, add_seconds, minutes_between};
use chrono::NaiveDateTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct Predictor<'a> {
    cfg: &'a PredictorConfig,
    vocab: &'a Vocabulary,
    seed: u64,
}

impl<'a> Predictor<'a> {
    pub fn new(cfg: &'a PredictorConfig, vocab: &'a Vocabulary, seed: u64) -> Self {
        Self { cfg, vocab, seed }
    }

    /// Records of the whole input that count towards `kind`
    pub fn series<'r>(&self, records: &'r [EventRecord], kind: EventKind) -> Vec<&'r EventRecord> {
        records
            .iter()
            .filter(|r| self.vocab.mentions(&r.label, kind) || self.vocab.is_combined(&r.label))
            .collect()
    }

    /// Latest record overall is stale if it is from a previous day or too many minutes old.
    pub fn is_stale(&self, records: &[EventRecord], now: NaiveDateTime) -> bool {
        match records.iter().map(EventRecord::timestamp).max() {
            Some(latest) => {
                latest.date() < now.date()
                    || minutes_between(latest, now) > self.cfg.stale_after_minutes
            }
            None => false,
        }
    }

    pub fn predict(
        &self,
        records: &[EventRecord],
        kind: EventKind,
        now: NaiveDateTime,
    ) -> AppResult<Prediction> {
        // 1️⃣ nothing parsed at all
        if records.is_empty() {
            return Err(AppError::NoData);
        }

        // 2️⃣ staleness of the input as a whole
        let is_stale = self.is_stale(records, now);

        // 3️⃣ series for this kind (combined occurrences count for both)
        let series = self.series(records, kind);
        if series.is_empty() {
            return Err(AppError::NoValidEvents(kind.ek_as_str().to_string()));
        }

        // 4️⃣ timestamps, oldest first
        let mut stamps: Vec<NaiveDateTime> = series.iter().map(|r| r.timestamp()).collect();
        stamps.sort();
        if stamps.len() < 2 {
            return Err(AppError::InsufficientHistory(kind.ek_as_str().to_string()));
        }
        let last = *stamps
            .last()
            .ok_or_else(|| AppError::Computation("empty series".into()))?;

        // 5️⃣ gaps in minutes
        let intervals: Vec<f64> = stamps
            .windows(2)
            .map(|w| (w[1] - w[0]).num_seconds() as f64 / 60.0)
            .collect();

        // 6️⃣ + 7️⃣ candidates and weighted blend
        let kind_seed = self.seed.wrapping_add(kind as u64);
        let candidates = ensemble::candidates(&intervals, self.cfg, kind_seed)?;
        let mut offset_secs = ensemble::blend_seconds(&candidates, &self.cfg.weights)?;

        if self.cfg.jitter_minutes > 0 {
            let mut rng = ChaCha8Rng::seed_from_u64(kind_seed);
            let j = self.cfg.jitter_minutes;
            offset_secs += (rng.gen_range(-j..=j) * 60) as f64;
        }

        if !offset_secs.is_finite() {
            return Err(AppError::Computation("non-finite ensemble offset".into()));
        }
        let mut at = add_seconds(last, offset_secs.round() as i64)?;

        // 8️⃣ a recent "both at once" event pulls the forecast earlier
        if let Some(alt) = self.combined_candidate(records, now)? {
            at = at.min(alt);
        }

        // 9️⃣ global interval cap
        if minutes_between(last, at) > self.cfg.interval_ceiling_minutes {
            at = add_minutes(last, self.cfg.interval_ceiling_minutes)?;
        }

        // 🔟 per-kind floor / ceiling
        let offset = minutes_between(last, at);
        let adjusted = self.cfg.type_rules.for_kind(kind).apply(offset);
        at = add_minutes(last, adjusted)?;

        // 1️⃣1️⃣ never predict the past
        if at <= now {
            at = add_minutes(now, self.cfg.future_fallback_minutes)?;
        }

        log::debug!(
            "{}: last={} offset={}m → {}",
            kind.ek_as_str(),
            last,
            minutes_between(last, at),
            at
        );

        Ok(Prediction {
            kind,
            at,
            location: majority_location(&series),
            is_stale,
            last_event: last,
        })
    }

    /// Latest combined occurrence + fixed offset, pushed to `now + fallback` if already past.
    fn combined_candidate(
        &self,
        records: &[EventRecord],
        now: NaiveDateTime,
    ) -> AppResult<Option<NaiveDateTime>> {
        let latest_combined = records
            .iter()
            .filter(|r| self.vocab.is_combined(&r.label))
            .map(EventRecord::timestamp)
            .max();

        let Some(ts) = latest_combined else {
            return Ok(None);
        };

        let alt = add_minutes(ts, self.cfg.combined_offset_minutes)?;
        if alt < now {
            Ok(Some(add_minutes(now, self.cfg.future_fallback_minutes)?))
        } else {
            Ok(Some(alt))
        }
    }
}

/// Most frequent known location; ties go to the one seen first.
/// `Unknown` entries do not vote, so a series without any known location gives `None`.
pub fn majority_location(series: &[&EventRecord]) -> Option<Location> {
    let mut counts: Vec<(&Location, usize)> = Vec::new();

    for rec in series.iter().filter(|r| r.location.is_known()) {
        match counts.iter_mut().find(|(loc, _)| *loc == &rec.location) {
            Some((_, n)) => *n += 1,
            None => counts.push((&rec.location, 1)),
        }
    }

    let mut best: Option<(&Location, usize)> = None;
    for (loc, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((loc, n));
        }
    }

    best.map(|(loc, _)| loc.clone())
}
