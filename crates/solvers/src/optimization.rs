//! Solvers that fit a [`LinearModel`] by minimizing its squared error.
//!
//! The shared residual math lives in [`Residuals`]: solvers call the model,
//! turn its predictions into residuals against the targets, and derive a cost
//! and a [`Gradient`] from them.
//!
//! # Solvers
//!
//! - [`gradient_descent`] — fixed-epoch batch gradient descent on the mean
//!   squared error
//!
//! [`LinearModel`]: linfit_core::LinearModel

mod residuals;

pub use residuals::{Gradient, PredictionLengthError, Residuals};

pub mod gradient_descent;
