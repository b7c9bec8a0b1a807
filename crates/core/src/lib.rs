//! Core traits and types for linfit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`LinearModel`] — a model with a slope and an intercept that can predict
//!   outputs for a slice of inputs
//! - [`Line`] — the plain `slope * x + intercept` model
//! - [`Samples`] — paired inputs and targets with matching, non-zero length
//! - [`Observer`] — receives solver events and optionally returns control actions

mod model;
mod observer;
mod samples;

pub use model::{Line, LinearModel};
pub use observer::Observer;
pub use samples::{DataError, Samples};
