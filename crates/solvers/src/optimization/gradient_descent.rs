//! Batch gradient descent for univariate linear models.
//!
//! # Algorithm
//!
//! Each epoch predicts every input, forms the residuals against the targets,
//! and steps both parameters against the gradient of the mean squared error:
//!
//! ```text
//! d_slope     = 2 * mean(error * x)
//! d_intercept = 2 * mean(error)
//! slope      -= learning_rate * d_slope
//! intercept  -= learning_rate * d_intercept
//! ```
//!
//! The solver runs exactly [`Config::epochs`] epochs. There is no convergence
//! check, and a learning rate that is too large makes the cost grow every
//! epoch instead of shrinking.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per epoch, after the parameters have been
//! updated. The event's `cost` is the sum of squared residuals measured
//! *before* the update. Observers can return [`Action::StopEarly`] to end
//! training after the current epoch.
//!
//! [`Reporter`] is an observer that writes a progress line every 100 epochs,
//! and [`Optimizer::train`] uses it to report to standard output.
//!
//! # Data Validation
//!
//! Empty samples and mismatched input/target lengths are rejected before the
//! model is touched. See [`Samples`] and [`Optimizer::train`].

mod action;
mod config;
mod error;
mod event;
mod optimizer;
mod report;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};
pub use error::Error;
pub use event::Event;
pub use optimizer::Optimizer;
pub use report::{DEFAULT_INTERVAL, Reporter};
pub use solution::{Solution, Status};

use linfit_core::{LinearModel, Observer, Samples};
use log::{debug, trace};

use super::Residuals;

/// Fits `model` to `samples`, updating its parameters in place.
///
/// The observer receives an [`Event`] after every epoch.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if the model fails to predict or predicts the wrong
/// number of outputs. Parameter updates made before the failing epoch are
/// kept.
pub fn train<M, Obs>(
    model: &mut M,
    samples: Samples<'_>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: LinearModel,
    Obs: Observer<Event, Action>,
{
    debug!(
        epochs = config.epochs(),
        learning_rate = config.learning_rate(),
        samples = samples.len();
        "starting gradient descent"
    );

    let mut cost = None;

    for epoch in 0..config.epochs() {
        let event = step(model, samples, config.learning_rate(), epoch)?;
        trace!(epoch = epoch, cost = event.cost; "epoch complete");
        cost = Some(event.cost);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(epoch = epoch; "training stopped by observer");
            return Ok(Solution::from_model(Status::StoppedByObserver, epoch + 1, model, cost));
        }
    }

    debug!(
        slope = model.slope(),
        intercept = model.intercept();
        "gradient descent complete"
    );

    Ok(Solution::from_model(Status::Complete, config.epochs(), model, cost))
}

/// Fits `model` to `samples` without observer support.
///
/// This is a convenience wrapper around [`train`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model fails to predict or predicts the wrong
/// number of outputs.
pub fn train_unobserved<M>(
    model: &mut M,
    samples: Samples<'_>,
    config: &Config,
) -> Result<Solution, Error>
where
    M: LinearModel,
{
    train(model, samples, config, ())
}

/// Runs one epoch and returns its event.
fn step<M: LinearModel>(
    model: &mut M,
    samples: Samples<'_>,
    learning_rate: f64,
    epoch: usize,
) -> Result<Event, Error> {
    let predictions = model.predict(samples.inputs()).map_err(Error::model)?;
    let residuals = Residuals::new(predictions, samples.targets())?;
    let gradient = residuals.gradient(samples.inputs());

    let slope = model.slope() - learning_rate * gradient.slope;
    let intercept = model.intercept() - learning_rate * gradient.intercept;
    model.set_slope(slope);
    model.set_intercept(intercept);

    Ok(Event {
        epoch,
        cost: residuals.cost(),
        gradient,
        slope,
        intercept,
    })
}
