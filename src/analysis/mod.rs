//! Analysis modules for edge structure and pair compatibility

/// Mahalanobis gradient compatibility scoring
pub mod compatibility;
/// Edge gradients and boundary difference sequences
pub mod gradient;
