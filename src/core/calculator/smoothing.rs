//! Holt's linear method: exponential smoothing with an additive trend,
//! no seasonality and no damping.

use super::IntervalModel;
use crate::errors::{AppError, AppResult};

/// Smoothing parameters are picked from this grid by one-step-ahead SSE.
const GRID_STEP: f64 = 0.05;

#[derive(Debug, Default, Clone, Copy)]
pub struct HoltLinear {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

/// Level/trend after running the recursion, plus the in-sample squared error.
struct Fit {
    level: f64,
    trend: f64,
    sse: f64,
}

fn run(y: &[f64], alpha: f64, beta: f64) -> Fit {
    let mut level = y[0];
    let mut trend = y[1] - y[0];
    let mut sse = 0.0;

    for &obs in &y[1..] {
        let expected = level + trend;
        sse += (obs - expected).powi(2);

        let prev_level = level;
        level = alpha * obs + (1.0 - alpha) * (level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
    }

    Fit { level, trend, sse }
}

fn grid() -> impl Iterator<Item = f64> + Clone {
    (1..20).map(|i| i as f64 * GRID_STEP)
}

impl HoltLinear {
    /// Fixed parameters override the grid search
    pub fn with_params(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
        }
    }

    fn fit(&self, y: &[f64]) -> Fit {
        let alphas: Vec<f64> = match self.alpha {
            Some(a) => vec![a],
            None => grid().collect(),
        };
        let betas: Vec<f64> = match self.beta {
            Some(b) => vec![b],
            None => grid().collect(),
        };

        let mut best: Option<Fit> = None;
        for &a in &alphas {
            for &b in &betas {
                let fit = run(y, a, b);
                if best.as_ref().is_none_or(|cur| fit.sse < cur.sse) {
                    best = Some(fit);
                }
            }
        }

        best.unwrap_or_else(|| run(y, 0.5, 0.5))
    }
}

impl IntervalModel for HoltLinear {
    fn name(&self) -> &'static str {
        "smoothed"
    }

    fn forecast(&self, intervals: &[f64]) -> AppResult<f64> {
        if intervals.len() < 2 {
            return Err(AppError::Computation(
                "exponential smoothing needs at least two intervals".into(),
            ));
        }

        let fit = self.fit(intervals);
        let next = fit.level + fit.trend;

        if next.is_finite() {
            Ok(next)
        } else {
            Err(AppError::Computation("smoothing diverged".into()))
        }
    }
}
