//! Shared fixtures for the cross-crate tests.

use std::convert::Infallible;

use linfit_core::{Line, LinearModel};
use thiserror::Error;

/// Evaluates `line` at every input.
#[must_use]
pub fn targets_for(line: Line, inputs: &[f64]) -> Vec<f64> {
    inputs.iter().map(|&x| line.at(x)).collect()
}

/// Closed-form ordinary least squares fit, used as the reference answer.
///
/// # Panics
///
/// Panics if fewer than two distinct inputs are given.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn least_squares(inputs: &[f64], targets: &[f64]) -> Line {
    let n = inputs.len() as f64;
    let mean_x = inputs.iter().sum::<f64>() / n;
    let mean_y = targets.iter().sum::<f64>() / n;

    let (cov, var) = inputs
        .iter()
        .zip(targets)
        .fold((0.0, 0.0), |(cov, var), (x, y)| {
            (cov + (x - mean_x) * (y - mean_y), var + (x - mean_x).powi(2))
        });
    assert!(var > 0.0, "need at least two distinct inputs");

    let slope = cov / var;
    Line::new(slope, mean_y - slope * mean_x)
}

/// A daily temperature trend: `baseline + per_day * day`.
///
/// Rejects non-finite day numbers, which stand in for missing readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureTrend {
    pub per_day: f64,
    pub baseline: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("day at index {index} is not a finite number")]
pub struct MissingDay {
    pub index: usize,
}

impl LinearModel for TemperatureTrend {
    type Error = MissingDay;

    fn slope(&self) -> f64 {
        self.per_day
    }

    fn intercept(&self) -> f64 {
        self.baseline
    }

    fn set_slope(&mut self, slope: f64) {
        self.per_day = slope;
    }

    fn set_intercept(&mut self, intercept: f64) {
        self.baseline = intercept;
    }

    fn predict(&self, days: &[f64]) -> Result<Vec<f64>, Self::Error> {
        days.iter()
            .enumerate()
            .map(|(index, day)| {
                if day.is_finite() {
                    Ok(self.baseline + self.per_day * day)
                } else {
                    Err(MissingDay { index })
                }
            })
            .collect()
    }
}

/// A model whose predictions ignore its parameters.
///
/// Gradient descent still updates the parameters, but the cost never moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    pub value: f64,
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel for Constant {
    type Error = Infallible;

    fn slope(&self) -> f64 {
        self.slope
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }

    fn set_slope(&mut self, slope: f64) {
        self.slope = slope;
    }

    fn set_intercept(&mut self, intercept: f64) {
        self.intercept = intercept;
    }

    fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(vec![self.value; inputs.len()])
    }
}
