use super::{IntervalModel, mean};
use crate::errors::{AppError, AppResult};

/// Plain average of every observed interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanInterval;

impl IntervalModel for MeanInterval {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn forecast(&self, intervals: &[f64]) -> AppResult<f64> {
        mean(intervals).ok_or_else(|| AppError::Computation("no intervals to average".into()))
    }
}
