//! Interval models: each one looks at the minutes between consecutive events
//! and guesses the next gap.

pub mod baseline;
pub mod ensemble;
pub mod regression;
pub mod smoothing;

use crate::errors::AppResult;

/// A stateless forecaster over an interval series (minutes).
pub trait IntervalModel {
    fn name(&self) -> &'static str;

    /// One-step-ahead forecast of the next interval.
    fn forecast(&self, intervals: &[f64]) -> AppResult<f64>;
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
