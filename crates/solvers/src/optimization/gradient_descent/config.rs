use thiserror::Error;

/// Learning rate used by [`Config::default`].
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Epoch count used by [`Config::default`].
pub const DEFAULT_EPOCHS: usize = 1000;

/// Configuration for the gradient descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    learning_rate: f64,
    epochs: usize,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite and positive")]
    LearningRate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated learning rate.
    ///
    /// Zero epochs is allowed and leaves the model untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `learning_rate` is non-finite, zero, or negative.
    pub fn new(learning_rate: f64, epochs: usize) -> Result<Self, ConfigError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }

        Ok(Self {
            learning_rate,
            epochs,
        })
    }

    /// Returns the step size that scales each gradient update.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the total number of update epochs.
    #[must_use]
    pub fn epochs(&self) -> usize {
        self.epochs
    }
}
