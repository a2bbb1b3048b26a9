//! Mahalanobis gradient compatibility between tile pairs
//!
//! A seam between two correctly adjacent tiles continues the image's
//! local gradient. The score measures how far the observed boundary
//! differences stray from each tile's own edge gradient, weighted by the
//! inverse covariance of the residuals. Lower scores mean more plausible
//! seams.

use crate::analysis::gradient::{self, Edge, Orientation};
use crate::io::configuration::DETERMINANT_EPSILON;
use crate::io::error::{Result, SolverError};
use crate::math::stats::sample_covariance;
use crate::spatial::tiles::{Pixel, Tile};

/// Spatial relation between an ordered pair of tiles
///
/// The ordering (`Horizontal` before `Vertical`) is the final component
/// of the candidate tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// Second tile placed immediately to the right of the first
    Horizontal,
    /// Second tile placed immediately below the first
    Vertical,
}

impl Relation {
    /// Grid offset of the second tile relative to the first, as row and
    /// column deltas
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Horizontal => [0, 1],
            Self::Vertical => [1, 0],
        }
    }

    const fn forward_orientation(self) -> Orientation {
        match self {
            Self::Horizontal => Orientation::RightOf,
            Self::Vertical => Orientation::Below,
        }
    }

    const fn mirrored_orientation(self) -> Orientation {
        match self {
            Self::Horizontal => Orientation::LeftOf,
            Self::Vertical => Orientation::Above,
        }
    }

    /// Edge of the first tile facing the seam
    pub const fn source_edge(self) -> Edge {
        match self {
            Self::Horizontal => Edge::Right,
            Self::Vertical => Edge::Bottom,
        }
    }

    /// Edge of the second tile facing the seam
    pub const fn target_edge(self) -> Edge {
        match self {
            Self::Horizontal => Edge::Left,
            Self::Vertical => Edge::Top,
        }
    }
}

/// Mahalanobis cost of one directed view across a seam
///
/// Residuals are the boundary differences minus the expected gradient.
/// Their sample covariance is inverted and each boundary position
/// contributes its quadratic form under that inverse.
fn view_score(differences: &[Pixel], expected_gradient: [f64; 3]) -> Result<f64> {
    let residuals: Vec<[f64; 3]> = differences
        .iter()
        .map(|difference| {
            [
                f64::from(difference[0]) - expected_gradient[0],
                f64::from(difference[1]) - expected_gradient[1],
                f64::from(difference[2]) - expected_gradient[2],
            ]
        })
        .collect();

    let covariance = sample_covariance(&residuals);
    let inverse = covariance.inverse(DETERMINANT_EPSILON).ok_or_else(|| {
        SolverError::DegenerateCovariance {
            determinant: covariance.determinant(),
        }
    })?;

    Ok(residuals
        .iter()
        .map(|&residual| inverse.quadratic_form(residual))
        .sum())
}

/// Directed compatibility of placing `b` against `a` in `relation`
///
/// Sums the forward view, scored against the first tile's facing-edge
/// gradient, with the mirrored view, scored against the second tile's.
/// The measure is asymmetric in pair order.
///
/// # Errors
///
/// Returns [`SolverError::DegenerateCovariance`] when either view's
/// residual covariance cannot be inverted, which happens on boundaries
/// with no channel variation.
pub fn compatibility_score(a: &Tile, b: &Tile, relation: Relation) -> Result<f64> {
    let forward = gradient::boundary_difference(a, b, relation.forward_orientation());
    let mirrored = gradient::boundary_difference(a, b, relation.mirrored_orientation());

    let source_gradient = gradient::edge_gradient(a, relation.source_edge());
    let target_gradient = gradient::edge_gradient(b, relation.target_edge());

    Ok(view_score(&forward, source_gradient)? + view_score(&mirrored, target_gradient)?)
}
