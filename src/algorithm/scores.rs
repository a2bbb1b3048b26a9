//! Dense pair-score tables and globally ranked seam candidates

use ndarray::Array2;
use std::cmp::Ordering;

use crate::analysis::compatibility::{Relation, compatibility_score};
use crate::spatial::tiles::TileSet;

/// Outcome of scoring one directed tile pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairScore {
    /// Finite compatibility cost, lower is better
    Compatible(f64),
    /// Pair excluded from assembly
    ///
    /// Covers the diagonal, degenerate covariances and non-finite sums.
    Incompatible,
}

/// One placeable seam between two tiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamCandidate {
    /// Compatibility cost of the seam
    pub score: f64,
    /// Index of the first tile
    pub tile_a: usize,
    /// Index of the second tile
    pub tile_b: usize,
    /// Placement of the second tile relative to the first
    pub relation: Relation,
}

/// Precomputed compatibility for every directed tile pair
///
/// Row index is the first tile, column index the second. The diagonal is
/// structurally incompatible and never counted as a scoring failure.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    horizontal: Array2<PairScore>,
    vertical: Array2<PairScore>,
    tile_count: usize,
    incompatible_pairs: usize,
}

impl ScoreTable {
    /// Score every directed pair in both relations
    pub fn build(tiles: &TileSet) -> Self {
        Self::build_with_progress(tiles, |_| {})
    }

    /// Score every directed pair, reporting completed pair counts
    ///
    /// The observer receives the number of ordered pairs finished so far,
    /// out of `tile_count * (tile_count - 1)`. Both relations of a pair
    /// are scored before it is reported.
    pub fn build_with_progress<F>(tiles: &TileSet, mut observer: F) -> Self
    where
        F: FnMut(usize),
    {
        let tile_count = tiles.len();
        let mut horizontal = Array2::from_elem((tile_count, tile_count), PairScore::Incompatible);
        let mut vertical = Array2::from_elem((tile_count, tile_count), PairScore::Incompatible);
        let mut incompatible_pairs = 0;
        let mut evaluated = 0;

        for (index_a, tile_a) in tiles.tiles().iter().enumerate() {
            for (index_b, tile_b) in tiles.tiles().iter().enumerate() {
                if index_a == index_b {
                    continue;
                }

                for (relation, table) in [
                    (Relation::Horizontal, &mut horizontal),
                    (Relation::Vertical, &mut vertical),
                ] {
                    let score = match compatibility_score(tile_a, tile_b, relation) {
                        Ok(value) if value.is_finite() => PairScore::Compatible(value),
                        _ => {
                            incompatible_pairs += 1;
                            PairScore::Incompatible
                        }
                    };

                    if let Some(entry) = table.get_mut([index_a, index_b]) {
                        *entry = score;
                    }
                }

                evaluated += 1;
                observer(evaluated);
            }
        }

        Self {
            horizontal,
            vertical,
            tile_count,
            incompatible_pairs,
        }
    }

    /// Number of tiles the table was built from
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Off-diagonal directed evaluations that produced no usable score
    pub const fn incompatible_pairs(&self) -> usize {
        self.incompatible_pairs
    }

    /// Score recorded for a directed pair in `relation`
    ///
    /// Out-of-range indices read as incompatible.
    pub fn score(&self, tile_a: usize, tile_b: usize, relation: Relation) -> PairScore {
        self.table(relation)
            .get([tile_a, tile_b])
            .copied()
            .unwrap_or(PairScore::Incompatible)
    }

    /// All compatible candidates, best first
    ///
    /// Sorted ascending by score; ties break on first tile index, second
    /// tile index, then relation, keeping runs reproducible.
    pub fn ranked_candidates(&self) -> Vec<SeamCandidate> {
        let mut candidates = Vec::new();

        for relation in [Relation::Horizontal, Relation::Vertical] {
            for ((tile_a, tile_b), entry) in self.table(relation).indexed_iter() {
                if let PairScore::Compatible(score) = *entry {
                    candidates.push(SeamCandidate {
                        score,
                        tile_a,
                        tile_b,
                        relation,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.tile_a.cmp(&b.tile_a))
                .then_with(|| a.tile_b.cmp(&b.tile_b))
                .then_with(|| a.relation.cmp(&b.relation))
        });

        candidates
    }

    const fn table(&self, relation: Relation) -> &Array2<PairScore> {
        match relation {
            Relation::Horizontal => &self.horizontal,
            Relation::Vertical => &self.vertical,
        }
    }
}
