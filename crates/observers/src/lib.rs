//! Reusable observers for linfit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the gradient descent solver and any solver whose events expose
//! the same capabilities.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEpoch`], [`HasCost`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`CostHistory`] — records the cost curve at a fixed epoch spacing
//! - [`LogProgress`] — emits `log` records with structured progress fields
//!
//! [`Observer`]: linfit_core::Observer
//! [`HasEpoch`]: traits::HasEpoch
//! [`HasCost`]: traits::HasCost
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::CostHistory;
pub use logging::LogProgress;
