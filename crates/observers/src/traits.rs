//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasEpoch`] — events tied to a zero-based epoch index
//! - [`HasCost`] — events that carry a cost value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use linfit_core::Observer;
//! use linfit_observers::traits::{CanStopEarly, HasEpoch};
//!
//! struct Budget {
//!     max_epochs: usize,
//! }
//!
//! impl<E: HasEpoch, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.epoch() + 1 >= self.max_epochs).then(A::stop_early)
//!     }
//! }
//! ```

use linfit_solvers::optimization::gradient_descent;

/// An event tied to a zero-based epoch index.
pub trait HasEpoch {
    /// Returns the epoch this event belongs to.
    fn epoch(&self) -> usize;
}

/// An event that carries a cost value.
pub trait HasCost {
    /// Returns the cost for this event.
    fn cost(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasEpoch for gradient_descent::Event {
    fn epoch(&self) -> usize {
        self.epoch
    }
}

impl HasCost for gradient_descent::Event {
    fn cost(&self) -> f64 {
        self.cost
    }
}

impl CanStopEarly for gradient_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
