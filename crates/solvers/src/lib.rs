//! Solvers for fitting linear models.
//!
//! # Modules
//!
//! - [`optimization`] — residual math and the batch gradient descent solver

pub mod optimization;
