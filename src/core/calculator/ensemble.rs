use super::IntervalModel;
use super::baseline::MeanInterval;
use super::regression::MlpRegressor;
use super::smoothing::HoltLinear;
use crate::config::{EnsembleWeights, PredictorConfig};
use crate::errors::{AppError, AppResult};

/// The three candidate next-interval guesses, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidates {
    pub baseline: f64,
    pub smoothed: f64,
    pub regression: f64,
}

/// Run the three models over `intervals`.
///
/// Short series fall back down the chain: regression → smoothed → baseline.
pub fn candidates(intervals: &[f64], cfg: &PredictorConfig, seed: u64) -> AppResult<Candidates> {
    let baseline = run_model(&MeanInterval, intervals)?;

    let smoothed = if intervals.len() >= cfg.smoothing_min_intervals.max(2) {
        run_model(&HoltLinear::default(), intervals)?
    } else {
        baseline
    };

    let regression = if intervals.len() >= cfg.regression_min_intervals.max(2) {
        run_model(&MlpRegressor::new(seed), intervals)?
    } else {
        smoothed
    };

    Ok(Candidates {
        baseline,
        smoothed,
        regression,
    })
}

fn run_model(model: &dyn IntervalModel, intervals: &[f64]) -> AppResult<f64> {
    let next = model.forecast(intervals)?;
    log::debug!(
        "{} over {} intervals: {:.1}m",
        model.name(),
        intervals.len(),
        next
    );
    Ok(next)
}

/// Weighted blend of the candidates, as an offset in seconds.
pub fn blend_seconds(c: &Candidates, w: &EnsembleWeights) -> AppResult<f64> {
    let total = w.regression + w.smoothed + w.baseline;
    if !(total.is_finite() && total > 0.0) {
        return Err(AppError::Computation(format!(
            "ensemble weights must sum to a positive value (got {total})"
        )));
    }

    let minutes =
        (w.regression * c.regression + w.smoothed * c.smoothed + w.baseline * c.baseline) / total;
    Ok(minutes * 60.0)
}
