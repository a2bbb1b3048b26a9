//! Edge gradients and boundary difference sequences
//!
//! The outermost line of a tile and its inner neighbour estimate how the
//! image changes when leaving the tile through an edge. Boundary
//! differences measure how it actually changes across a candidate seam
//! between two tiles.

use crate::math::stats::channel_means;
use crate::spatial::tiles::{Pixel, Tile};

/// One of the four tile edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// First column
    Left,
    /// First row
    Top,
    /// Last column
    Right,
    /// Last row
    Bottom,
}

impl Edge {
    /// Stable position of this edge in per-tile edge ordering
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

/// Directed view across the seam between an ordered tile pair
///
/// `RightOf` and `Below` read the seam outward from the first tile.
/// `LeftOf` and `Above` are their elementwise negations, reading the
/// same seam outward from the second tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Second tile's first column minus first tile's last column
    RightOf,
    /// Second tile's first row minus first tile's last row
    Below,
    /// First tile's last column minus second tile's first column
    LeftOf,
    /// First tile's last row minus second tile's first row
    Above,
}

fn pixel_difference(outer: Pixel, inner: Pixel) -> Pixel {
    [
        outer[0] - inner[0],
        outer[1] - inner[1],
        outer[2] - inner[2],
    ]
}

/// Mean outward gradient across `edge`, per channel
///
/// Each position along the edge contributes the outermost pixel minus its
/// inner neighbour; the result averages those differences over the edge.
pub fn edge_gradient(tile: &Tile, edge: Edge) -> [f64; 3] {
    let height = tile.height();
    let width = tile.width();
    let last_row = height.saturating_sub(1);
    let last_col = width.saturating_sub(1);
    let inner_row = height.saturating_sub(2);
    let inner_col = width.saturating_sub(2);

    let differences: Vec<Pixel> = match edge {
        Edge::Left => (0..height)
            .map(|row| pixel_difference(tile.pixel(row, 0), tile.pixel(row, 1)))
            .collect(),
        Edge::Top => (0..width)
            .map(|col| pixel_difference(tile.pixel(0, col), tile.pixel(1, col)))
            .collect(),
        Edge::Right => (0..height)
            .map(|row| pixel_difference(tile.pixel(row, last_col), tile.pixel(row, inner_col)))
            .collect(),
        Edge::Bottom => (0..width)
            .map(|col| pixel_difference(tile.pixel(last_row, col), tile.pixel(inner_row, col)))
            .collect(),
    };

    channel_means(&differences)
}

/// Pixel differences across the seam of an ordered pair in `orientation`
///
/// Horizontal orientations compare the facing columns and yield one entry
/// per row; vertical orientations compare the facing rows and yield one
/// entry per column. The sequence length follows the first tile.
pub fn boundary_difference(a: &Tile, b: &Tile, orientation: Orientation) -> Vec<Pixel> {
    let last_row = a.height().saturating_sub(1);
    let last_col = a.width().saturating_sub(1);

    match orientation {
        Orientation::RightOf => (0..a.height())
            .map(|row| pixel_difference(b.pixel(row, 0), a.pixel(row, last_col)))
            .collect(),
        Orientation::Below => (0..a.width())
            .map(|col| pixel_difference(b.pixel(0, col), a.pixel(last_row, col)))
            .collect(),
        Orientation::LeftOf => (0..a.height())
            .map(|row| pixel_difference(a.pixel(row, last_col), b.pixel(row, 0)))
            .collect(),
        Orientation::Above => (0..a.width())
            .map(|col| pixel_difference(a.pixel(last_row, col), b.pixel(0, col)))
            .collect(),
    }
}
