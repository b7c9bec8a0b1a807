use linfit_core::{LinearModel, Observer, Samples};
use log::warn;

use super::{Action, Config, Error, Event, Reporter, Solution, train};

/// A gradient descent optimizer bound to one [`Config`].
///
/// # Example
///
/// ```
/// use linfit_core::Line;
/// use linfit_solvers::optimization::gradient_descent::{Config, Optimizer};
///
/// let inputs = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let targets = inputs.map(|x| 2.0 * x + 3.0);
///
/// let mut line = Line::default();
/// let optimizer = Optimizer::new(Config::new(0.01, 1000)?);
/// optimizer.train(&mut line, &inputs, &targets)?;
///
/// assert!((line.slope - 2.0).abs() < 0.05);
/// assert!((line.intercept - 3.0).abs() < 0.1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Optimizer {
    config: Config,
}

impl Optimizer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fits `model` to the paired `inputs` and `targets`, reporting progress
    /// to standard output every 100 epochs.
    ///
    /// A failure to write progress is logged and does not fail training.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Data`] without touching the model if the slices are
    /// empty or differ in length, and propagates model failures.
    pub fn train<M: LinearModel>(
        &self,
        model: &mut M,
        inputs: &[f64],
        targets: &[f64],
    ) -> Result<Solution, Error> {
        let mut reporter = Reporter::stdout();
        let solution = self.train_observed(model, inputs, targets, &mut reporter)?;

        if let Err(err) = reporter.finish() {
            warn!("failed to write training progress: {err}");
        }

        Ok(solution)
    }

    /// Fits `model` to the paired `inputs` and `targets` with a caller-chosen
    /// observer instead of the stdout reporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Data`] without touching the model if the slices are
    /// empty or differ in length, and propagates model failures.
    pub fn train_observed<M, Obs>(
        &self,
        model: &mut M,
        inputs: &[f64],
        targets: &[f64],
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        M: LinearModel,
        Obs: Observer<Event, Action>,
    {
        let samples = Samples::new(inputs, targets)?;
        train(model, samples, &self.config, observer)
    }
}
