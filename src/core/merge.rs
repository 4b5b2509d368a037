//! Collapse two near-simultaneous predictions into one, and decide whether to
//! warn about outdated input.

use crate::models::event_kind::EventKind;
use crate::models::prediction::{CombinedPrediction, Outcome, Prediction};
use crate::utils::date::format_date;
use crate::utils::mins2readable;
use crate::utils::time::{minutes_apart, minutes_between};
use chrono::NaiveDateTime;

/// Merge the two per-kind outcomes when both succeeded and their times of day
/// are at most `window_minutes` apart. On merge the individual outcomes are dropped.
/// The combined time is always after `now`.
pub fn merge_outcomes(
    outcomes: Vec<Outcome>,
    window_minutes: i64,
    now: NaiveDateTime,
) -> (Vec<Outcome>, Option<CombinedPrediction>) {
    let combined = match outcomes.as_slice() {
        [Outcome::Predicted(first), Outcome::Predicted(second)] => {
            combine(first, second, window_minutes, now)
        }
        _ => None,
    };

    match combined {
        Some(c) => (Vec::new(), Some(c)),
        None => (outcomes, None),
    }
}

fn combine(
    first: &Prediction,
    second: &Prediction,
    window: i64,
    now: NaiveDateTime,
) -> Option<CombinedPrediction> {
    if minutes_apart(first.time(), second.time()) > window {
        return None;
    }

    let time = first.time().min(second.time());
    log::debug!(
        "merging {} at {} and {} at {}",
        first.kind.ek_as_str(),
        first.time(),
        second.kind.ek_as_str(),
        second.time()
    );

    // Predictions on different days can put the earlier time of day in the past.
    let mut at = first.date().and_time(time);
    if at <= now {
        at = first.at.min(second.at);
    }

    Some(CombinedPrediction {
        at,
        location: first.location.clone().or_else(|| second.location.clone()),
        is_stale: first.is_stale || second.is_stale,
    })
}

/// Warning text when any kind's latest contributing record is older than `threshold_minutes`.
///
/// `latest` holds one entry per kind that has records, whether or not its prediction succeeded.
pub fn stale_warning(
    latest: &[(EventKind, NaiveDateTime)],
    now: NaiveDateTime,
    threshold_minutes: i64,
) -> Option<String> {
    let (kind, last_event) = latest
        .iter()
        .filter(|(_, ts)| minutes_between(*ts, now) > threshold_minutes)
        .min_by_key(|(_, ts)| *ts)?;

    Some(format!(
        "The latest {} record is from {} {}, more than {} ago: the data may be outdated and predictions may be inaccurate.",
        kind.ek_as_str(),
        format_date(last_event.date()),
        last_event.format("%H:%M"),
        mins2readable(threshold_minutes, false, false),
    ))
}
