use std::num::NonZeroUsize;

use linfit_core::Observer;
use linfit_solvers::optimization::gradient_descent::{Action, DEFAULT_INTERVAL, Event};
use log::Level;

/// An observer that emits a `log` record every `interval` epochs.
///
/// Each record carries `epoch`, `cost`, `slope`, and `intercept` as
/// structured key-values, and the [`Event`] progress line as its message.
/// Records are emitted at [`Level::Info`] unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogProgress {
    interval: NonZeroUsize,
    level: Level,
}

impl LogProgress {
    /// Logs every 100 epochs at [`Level::Info`].
    #[must_use]
    pub fn new() -> Self {
        Self::every(DEFAULT_INTERVAL)
    }

    /// Logs every `interval` epochs at [`Level::Info`].
    #[must_use]
    pub fn every(interval: NonZeroUsize) -> Self {
        Self {
            interval,
            level: Level::Info,
        }
    }

    /// Sets the level of the emitted records.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer<Event, Action> for LogProgress {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        if event.epoch % self.interval.get() == 0 {
            log::log!(
                self.level,
                epoch = event.epoch,
                cost = event.cost,
                slope = event.slope,
                intercept = event.intercept;
                "{event}"
            );
        }
        None
    }
}
