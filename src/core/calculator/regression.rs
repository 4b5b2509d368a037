//! Tiny feed-forward regressor: interval index → interval length.
//!
//! One hidden tanh layer, linear output, full-batch gradient descent on
//! standardized targets. Weights are initialised from a seeded ChaCha RNG so
//! the same series and seed always give the same forecast.

use super::{IntervalModel, mean};
use crate::errors::{AppError, AppResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
pub struct MlpRegressor {
    pub hidden: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: u64,
}

impl MlpRegressor {
    pub fn new(seed: u64) -> Self {
        Self {
            hidden: 8,
            epochs: 2000,
            learning_rate: 0.05,
            seed,
        }
    }
}

struct Network {
    w1: Vec<f64>,
    b1: Vec<f64>,
    w2: Vec<f64>,
    b2: f64,
}

impl Network {
    fn init(hidden: usize, rng: &mut ChaCha8Rng) -> Self {
        // Xavier/Glorot uniform range for a 1 → hidden → 1 net
        let limit = (6.0 / (1 + hidden) as f64).sqrt();
        let mut draw = |n: usize| -> Vec<f64> { (0..n).map(|_| rng.gen_range(-limit..limit)).collect() };

        Self {
            w1: draw(hidden),
            b1: vec![0.0; hidden],
            w2: draw(hidden),
            b2: 0.0,
        }
    }

    fn hidden(&self, x: f64) -> Vec<f64> {
        self.w1
            .iter()
            .zip(&self.b1)
            .map(|(w, b)| (w * x + b).tanh())
            .collect()
    }

    fn output(&self, h: &[f64]) -> f64 {
        h.iter().zip(&self.w2).map(|(h, w)| h * w).sum::<f64>() + self.b2
    }

    fn predict(&self, x: f64) -> f64 {
        self.output(&self.hidden(x))
    }

    fn step(&mut self, xs: &[f64], ys: &[f64], lr: f64) {
        let n = xs.len() as f64;
        let k = self.w1.len();
        let mut g_w1 = vec![0.0; k];
        let mut g_b1 = vec![0.0; k];
        let mut g_w2 = vec![0.0; k];
        let mut g_b2 = 0.0;

        for (&x, &y) in xs.iter().zip(ys) {
            let h = self.hidden(x);
            let err = self.output(&h) - y;

            g_b2 += err;
            for j in 0..k {
                g_w2[j] += err * h[j];
                let dh = err * self.w2[j] * (1.0 - h[j] * h[j]);
                g_w1[j] += dh * x;
                g_b1[j] += dh;
            }
        }

        for j in 0..k {
            self.w1[j] -= lr * g_w1[j] / n;
            self.b1[j] -= lr * g_b1[j] / n;
            self.w2[j] -= lr * g_w2[j] / n;
        }
        self.b2 -= lr * g_b2 / n;
    }
}

impl IntervalModel for MlpRegressor {
    fn name(&self) -> &'static str {
        "regression"
    }

    fn forecast(&self, intervals: &[f64]) -> AppResult<f64> {
        let n = intervals.len();
        if n < 2 {
            return Err(AppError::Computation(
                "regression needs at least two intervals".into(),
            ));
        }

        let mu = mean(intervals).unwrap_or(0.0);
        let sigma = (intervals.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / n as f64).sqrt();

        // A flat series has nothing to learn.
        if sigma < f64::EPSILON {
            return Ok(mu);
        }

        let scale = (n - 1) as f64;
        let xs: Vec<f64> = (0..n).map(|i| i as f64 / scale).collect();
        let ys: Vec<f64> = intervals.iter().map(|v| (v - mu) / sigma).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut net = Network::init(self.hidden, &mut rng);
        for _ in 0..self.epochs {
            net.step(&xs, &ys, self.learning_rate);
        }

        let next = net.predict(n as f64 / scale) * sigma + mu;
        if next.is_finite() {
            Ok(next)
        } else {
            Err(AppError::Computation("regressor diverged".into()))
        }
    }
}
