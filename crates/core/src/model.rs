use std::convert::Infallible;

/// A univariate linear model with a slope and an intercept.
///
/// Solvers read and overwrite the two parameters between epochs and call
/// [`predict`](LinearModel::predict) to obtain the model's outputs. The
/// prediction formula belongs to the implementor; solvers only assume the
/// output has one entry per input.
pub trait LinearModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the current slope.
    fn slope(&self) -> f64;

    /// Returns the current intercept.
    fn intercept(&self) -> f64;

    /// Overwrites the slope.
    fn set_slope(&mut self, slope: f64);

    /// Overwrites the intercept.
    fn set_intercept(&mut self, intercept: f64);

    /// Predicts one output per input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

/// The line `y = slope * x + intercept`.
///
/// The default line has zero slope and zero intercept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    /// Creates a line from its slope and intercept.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the line at a single `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl LinearModel for Line {
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
        Ok(inputs.iter().map(|&x| self.at(x)).collect())
    }
}
