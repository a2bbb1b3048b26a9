//! Jigsaw-style image reconstruction from unordered rectangular tiles using gradient statistics
//!
//! The system scores every directed tile pair with a Mahalanobis gradient
//! compatibility measure, then greedily accepts the most plausible seams to
//! grow rigid components until no candidate seam remains.

#![forbid(unsafe_code)]

/// Core algorithm implementation including score tables and greedy assembly
pub mod algorithm;
/// Edge gradient extraction and pair compatibility analysis
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for covariance and channel statistics
pub mod math;
/// Tile storage and assembled mosaic layouts
pub mod spatial;

pub use io::error::{Result, SolverError};
