use std::num::NonZeroUsize;

use linfit_core::Observer;

use crate::traits::{HasCost, HasEpoch};

/// An observer that records `(epoch, cost)` pairs during training.
///
/// By default every epoch is recorded; use [`CostHistory::every`] to keep
/// only epochs `0, interval, 2 * interval, …`.
///
/// Pass `&mut history` as the observer so the recorded points can be read
/// after training:
///
/// ```
/// use linfit_core::{Line, Samples};
/// use linfit_observers::CostHistory;
/// use linfit_solvers::optimization::gradient_descent::{Config, train};
///
/// let inputs = [0.0, 1.0, 2.0];
/// let targets = [1.0, 3.0, 5.0];
/// let samples = Samples::new(&inputs, &targets)?;
///
/// let mut history = CostHistory::new();
/// train(&mut Line::default(), samples, &Config::new(0.05, 50)?, &mut history)?;
///
/// assert_eq!(history.points().len(), 50);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostHistory {
    interval: NonZeroUsize,
    points: Vec<(usize, f64)>,
}

impl CostHistory {
    /// Creates a history that records every epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::every(NonZeroUsize::MIN)
    }

    /// Creates a history that records every `interval` epochs.
    #[must_use]
    pub fn every(interval: NonZeroUsize) -> Self {
        Self {
            interval,
            points: Vec::new(),
        }
    }

    /// Records a single point, regardless of the interval.
    pub fn record(&mut self, epoch: usize, cost: f64) {
        self.points.push((epoch, cost));
    }

    /// Returns the recorded `(epoch, cost)` pairs in recording order.
    #[must_use]
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Returns the cost recorded for `epoch`, if any.
    #[must_use]
    pub fn cost_at(&self, epoch: usize) -> Option<f64> {
        self.points
            .iter()
            .find(|(recorded, _)| *recorded == epoch)
            .map(|&(_, cost)| cost)
    }

    /// Consumes the history and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<(usize, f64)> {
        self.points
    }
}

impl Default for CostHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for CostHistory
where
    E: HasEpoch + HasCost,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let epoch = event.epoch();
        if epoch % self.interval.get() == 0 {
            self.record(epoch, event.cost());
        }
        None
    }
}

/// Allows `&mut CostHistory` to be passed to solvers that take an observer by
/// value, so the history can be read after training.
impl<E, A> Observer<E, A> for &mut CostHistory
where
    E: HasEpoch + HasCost,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Event {
        epoch: usize,
        cost: f64,
    }

    impl HasEpoch for Event {
        fn epoch(&self) -> usize {
            self.epoch
        }
    }

    impl HasCost for Event {
        fn cost(&self) -> f64 {
            self.cost
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(history: &mut CostHistory, epoch: usize, cost: f64) {
        let _: Option<()> = history.observe(&Event { epoch, cost });
    }

    #[test]
    fn records_every_epoch_by_default() {
        let mut history = CostHistory::new();
        feed(&mut history, 0, 4.0);
        feed(&mut history, 1, 2.0);
        feed(&mut history, 2, 1.0);

        assert_eq!(history.points(), [(0, 4.0), (1, 2.0), (2, 1.0)]);
    }

    #[test]
    fn skips_epochs_between_intervals() {
        let mut history = CostHistory::every(NonZeroUsize::new(10).unwrap());
        for epoch in 0..25 {
            feed(&mut history, epoch, f64::from(u32::try_from(epoch).unwrap()));
        }

        assert_eq!(history.into_points(), vec![(0, 0.0), (10, 10.0), (20, 20.0)]);
    }

    #[test]
    fn looks_up_cost_by_epoch() {
        let mut history = CostHistory::new();
        history.record(0, 9.0);
        history.record(100, 0.5);

        assert_eq!(history.cost_at(100), Some(0.5));
        assert_eq!(history.cost_at(50), None);
    }

    #[test]
    fn never_returns_an_action() {
        let mut history = CostHistory::default();
        let action: Option<()> = history.observe(&Event {
            epoch: 0,
            cost: 1.0,
        });

        assert!(action.is_none());
    }
}
