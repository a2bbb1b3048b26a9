//! Mathematical utilities for the solver

/// Closed-form 3x3 matrix operations
pub mod matrix;
/// Channel statistics over pixel samples
pub mod stats;
