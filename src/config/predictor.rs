//! Numeric knobs of the forecaster.
//!
//! Every threshold the predictor applies lives here so the different
//! forecasting flavours (rule based, smoothing only, ensemble) are just
//! different configurations of the same engine.

use crate::models::event_kind::EventKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnsembleWeights {
    pub regression: f64,
    pub smoothed: f64,
    pub baseline: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self {
            regression: 0.5,
            smoothed: 0.3,
            baseline: 0.2,
        }
    }
}

/// Bounds applied to the offset (minutes after the latest event) for one kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OffsetRule {
    #[serde(default)]
    pub min_offset_minutes: Option<i64>,
    #[serde(default)]
    pub max_offset_minutes: Option<i64>,
}

impl OffsetRule {
    pub fn apply(&self, offset_minutes: i64) -> i64 {
        let mut m = offset_minutes;
        if let Some(floor) = self.min_offset_minutes {
            m = m.max(floor);
        }
        if let Some(ceiling) = self.max_offset_minutes {
            m = m.min(ceiling);
        }
        m
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeRules {
    pub pee: OffsetRule,
    pub poop: OffsetRule,
}

impl Default for TypeRules {
    fn default() -> Self {
        Self {
            pee: OffsetRule {
                min_offset_minutes: Some(60),
                max_offset_minutes: None,
            },
            poop: OffsetRule {
                min_offset_minutes: None,
                max_offset_minutes: Some(600),
            },
        }
    }
}

impl TypeRules {
    pub fn for_kind(&self, kind: EventKind) -> &OffsetRule {
        match kind {
            EventKind::Pee => &self.pee,
            EventKind::Poop => &self.poop,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    #[serde(default)]
    pub weights: EnsembleWeights,
    #[serde(default)]
    pub type_rules: TypeRules,
    #[serde(default = "default_interval_ceiling")]
    pub interval_ceiling_minutes: i64,
    #[serde(default = "default_stale_after")]
    pub stale_after_minutes: i64,
    #[serde(default = "default_merge_stale_after")]
    pub merge_stale_after_minutes: i64,
    #[serde(default = "default_combined_offset")]
    pub combined_offset_minutes: i64,
    #[serde(default = "default_future_fallback")]
    pub future_fallback_minutes: i64,
    #[serde(default = "default_merge_window")]
    pub merge_window_minutes: i64,
    #[serde(default)]
    pub jitter_minutes: i64,
    #[serde(default = "default_smoothing_min")]
    pub smoothing_min_intervals: usize,
    #[serde(default = "default_regression_min")]
    pub regression_min_intervals: usize,
}

fn default_interval_ceiling() -> i64 {
    540
}
fn default_stale_after() -> i64 {
    600
}
fn default_merge_stale_after() -> i64 {
    900
}
fn default_combined_offset() -> i64 {
    120
}
fn default_future_fallback() -> i64 {
    60
}
fn default_merge_window() -> i64 {
    20
}
fn default_smoothing_min() -> usize {
    3
}
fn default_regression_min() -> usize {
    5
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            weights: EnsembleWeights::default(),
            type_rules: TypeRules::default(),
            interval_ceiling_minutes: default_interval_ceiling(),
            stale_after_minutes: default_stale_after(),
            merge_stale_after_minutes: default_merge_stale_after(),
            combined_offset_minutes: default_combined_offset(),
            future_fallback_minutes: default_future_fallback(),
            merge_window_minutes: default_merge_window(),
            jitter_minutes: 0,
            smoothing_min_intervals: default_smoothing_min(),
            regression_min_intervals: default_regression_min(),
        }
    }
}
