//! Formatting utilities used for CLI outputs.

use crate::models::event_kind::EventKind;
use crate::models::location::Location;
use crate::models::prediction::{CombinedPrediction, Outcome, Prediction};
use crate::utils::date::format_date;
use chrono::NaiveDateTime;

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

fn when(at: NaiveDateTime, weekday: &str) -> String {
    format!("{} on {}, {}", at.format("%H:%M"), weekday, format_date(at.date()))
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(loc) => format!(" ({loc})"),
        None => String::new(),
    }
}

fn stale_suffix(is_stale: bool) -> &'static str {
    if is_stale { " [data may be outdated]" } else { "" }
}

/// `Next pee: 14:35 on Monday, 19/10/2026 (outside)`
pub fn format_prediction(p: &Prediction) -> String {
    format!(
        "Next {}: {}{}{}",
        p.kind.ek_as_str(),
        when(p.at, p.weekday()),
        location_suffix(&p.location),
        stale_suffix(p.is_stale)
    )
}

pub fn format_combined(c: &CombinedPrediction) -> String {
    let names: Vec<&str> = EventKind::ALL.iter().map(EventKind::ek_as_str).collect();
    format!(
        "Next {} together: {}{}{}",
        names.join(" and "),
        when(c.at, c.weekday()),
        location_suffix(&c.location),
        stale_suffix(c.is_stale)
    )
}

pub fn format_outcome(o: &Outcome) -> String {
    match o {
        Outcome::Predicted(p) => format_prediction(p),
        Outcome::Failed { kind, message } => format!("{}: {}", kind.display_name(), message),
    }
}
