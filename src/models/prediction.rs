use super::event_kind::EventKind;
use super::location::Location;
use crate::utils::date::weekday_name;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Forecast for a single tracked kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub kind: EventKind,
    pub at: NaiveDateTime,
    pub location: Option<Location>,
    /// The most recent record of the whole input is too old to trust
    pub is_stale: bool,
    /// Latest record that contributed to this kind's series
    pub last_event: NaiveDateTime,
}

impl Prediction {
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.at.time()
    }

    pub fn weekday(&self) -> &'static str {
        weekday_name(self.at.date())
    }
}

/// Both kinds expected at (nearly) the same moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedPrediction {
    pub at: NaiveDateTime,
    pub location: Option<Location>,
    pub is_stale: bool,
}

impl CombinedPrediction {
    pub fn weekday(&self) -> &'static str {
        weekday_name(self.at.date())
    }
}

/// What the caller gets back for one tracked kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Predicted(Prediction),
    Failed { kind: EventKind, message: String },
}

impl Outcome {
    pub fn kind(&self) -> EventKind {
        match self {
            Outcome::Predicted(p) => p.kind,
            Outcome::Failed { kind, .. } => *kind,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Outcome::Predicted(p) => Some(p),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Result of one full parse → predict → merge cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub outcomes: Vec<Outcome>,
    pub combined: Option<CombinedPrediction>,
    pub stale_warning: Option<String>,
}
