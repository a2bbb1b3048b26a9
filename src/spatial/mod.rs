//! Spatial data structures for tiles and assembled layouts
//!
//! This module contains spatial-related functionality including:
//! - Tile storage and validated tile sets
//! - Component layouts and the assembled mosaic

/// Component layouts and the mosaic result
pub mod grid;
/// Tile data structures and tile-set validation
pub mod tiles;

pub use tiles::TileSet;
