use thiserror::Error;

/// Partial derivatives of the mean squared error with respect to the model
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// `∂MSE/∂slope = 2 * mean(error * x)`.
    pub slope: f64,

    /// `∂MSE/∂intercept = 2 * mean(error)`.
    pub intercept: f64,
}

/// The model returned a different number of predictions than there are targets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("model predicted {actual} outputs for {expected} inputs")]
pub struct PredictionLengthError {
    pub expected: usize,
    pub actual: usize,
}

/// Prediction errors (`prediction - target`) for one pass over the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Residuals {
    errors: Vec<f64>,
}

impl Residuals {
    /// Subtracts `targets` from `predictions` elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionLengthError`] if the lengths differ.
    pub fn new(mut predictions: Vec<f64>, targets: &[f64]) -> Result<Self, PredictionLengthError> {
        if predictions.len() != targets.len() {
            return Err(PredictionLengthError {
                expected: targets.len(),
                actual: predictions.len(),
            });
        }

        for (prediction, target) in predictions.iter_mut().zip(targets) {
            *prediction -= target;
        }

        Ok(Self {
            errors: predictions,
        })
    }

    #[must_use]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Returns the gradient of the mean squared error at the current parameters.
    ///
    /// `inputs` must be the inputs the predictions were made for. With no
    /// residuals both components are NaN.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `inputs` and the residuals differ in length.
    #[must_use]
    pub fn gradient(&self, inputs: &[f64]) -> Gradient {
        debug_assert_eq!(
            inputs.len(),
            self.errors.len(),
            "gradient needs one input per residual"
        );
        let weighted = self
            .errors
            .iter()
            .zip(inputs)
            .map(|(error, x)| error * x)
            .sum::<f64>();
        let total = self.errors.iter().sum::<f64>();

        Gradient {
            slope: 2.0 * (weighted / self.count()),
            intercept: 2.0 * (total / self.count()),
        }
    }

    /// Returns the sum of squared errors.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.errors.iter().map(|error| error * error).sum()
    }

    /// Returns the mean of the squared errors.
    #[must_use]
    pub fn mse(&self) -> f64 {
        self.cost() / self.count()
    }

    #[allow(clippy::cast_precision_loss)]
    fn count(&self) -> f64 {
        self.errors.len() as f64
    }
}
