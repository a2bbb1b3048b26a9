//! Input/output operations, configuration and error handling

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Solver constants and runtime defaults
pub mod configuration;
/// Error types for solver operations
pub mod error;
/// Mosaic rendering and PNG export
pub mod image;
/// Scoring progress display
pub mod progress;
/// Tile loading from image directories
pub mod tiles;
