use linfit_core::LinearModel;

/// Indicates how training terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran every configured epoch.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a gradient descent run.
///
/// The fitted parameters are also written to the model itself; they are
/// repeated here so callers can inspect the outcome without the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How training terminated.
    pub status: Status,

    /// Number of epochs completed.
    pub epochs: usize,

    /// Slope after the last completed epoch.
    pub slope: f64,

    /// Intercept after the last completed epoch.
    pub intercept: f64,

    /// Sum of squared residuals measured during the last epoch, before its
    /// update. `None` if no epoch ran.
    pub cost: Option<f64>,
}

impl Solution {
    pub(super) fn from_model<M: LinearModel>(
        status: Status,
        epochs: usize,
        model: &M,
        cost: Option<f64>,
    ) -> Self {
        Self {
            status,
            epochs,
            slope: model.slope(),
            intercept: model.intercept(),
            cost,
        }
    }
}
