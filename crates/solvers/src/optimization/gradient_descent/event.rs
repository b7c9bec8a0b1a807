use std::fmt;

use crate::optimization::Gradient;

/// Event emitted by the gradient descent solver after each epoch.
///
/// `Display` renders the progress line written by [`Reporter`]:
///
/// ```text
/// Epoch 0: Cost = 285.0000, Slope = 0.3600, Intercept = 0.1400
/// ```
///
/// [`Reporter`]: super::Reporter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based epoch index.
    pub epoch: usize,

    /// Sum of squared residuals before this epoch's update.
    pub cost: f64,

    /// Gradient used for this epoch's update.
    pub gradient: Gradient,

    /// Slope after the update.
    pub slope: f64,

    /// Intercept after the update.
    pub intercept: f64,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch {}: Cost = {:.4}, Slope = {:.4}, Intercept = {:.4}",
            self.epoch, self.cost, self.slope, self.intercept
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_progress_line() {
        let event = Event {
            epoch: 100,
            cost: 2.119_816_757,
            gradient: Gradient {
                slope: 0.0,
                intercept: 0.0,
            },
            slope: 2.5,
            intercept: -0.123_46,
        };

        assert_eq!(
            event.to_string(),
            "Epoch 100: Cost = 2.1198, Slope = 2.5000, Intercept = -0.1235"
        );
    }
}
