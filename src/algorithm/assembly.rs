//! Greedy seam acceptance over ranked candidates
//!
//! Every tile starts as its own rigid component. Candidates are offered
//! in ascending score order; each accepted seam either merges two
//! components by rigid translation or confirms an adjacency that an
//! earlier merge already produced. Consumed and conflicted edges never
//! reopen, so a single pass over the ranking is equivalent to repeatedly
//! extracting the global minimum.

use bitvec::prelude::*;
use std::collections::HashMap;

use crate::algorithm::scores::{ScoreTable, SeamCandidate};
use crate::analysis::compatibility::Relation;
use crate::analysis::gradient::Edge;
use crate::spatial::grid::{ComponentLayout, Mosaic};

const EDGES_PER_TILE: usize = 4;

/// Open-edge tracking across all tiles
///
/// Each tile owns four bits, one per edge. A set bit means the edge can
/// still take part in a seam; accepting a seam clears the two edges it
/// consumes.
#[derive(Clone, Debug)]
pub struct EdgeSet {
    bits: BitVec,
}

impl EdgeSet {
    /// Create a set with every edge of every tile open
    pub fn all_open(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count * EDGES_PER_TILE],
        }
    }

    const fn position(tile: usize, edge: Edge) -> usize {
        tile * EDGES_PER_TILE + edge.index()
    }

    /// Test whether an edge is still open
    ///
    /// Out-of-range tiles read as closed.
    pub fn is_open(&self, tile: usize, edge: Edge) -> bool {
        self.bits.get(Self::position(tile, edge)).as_deref() == Some(&true)
    }

    /// Close an edge, ignoring out-of-range tiles
    pub fn close(&mut self, tile: usize, edge: Edge) {
        let position = Self::position(tile, edge);
        if position < self.bits.len() {
            self.bits.set(position, false);
        }
    }

    /// Count edges still open
    pub fn open_count(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Incremental assembly state over rigid tile components
///
/// Components are identified by the index of their founding tile. Each
/// tile carries a placement in its component's local frame; merging
/// translates the absorbed component's placements wholesale, so relative
/// positions inside a component never change once established.
pub struct GreedyAssembler {
    component_ids: Vec<usize>,
    placements: Vec<[i32; 2]>,
    component_cells: Vec<HashMap<[i32; 2], usize>>,
    component_members: Vec<Vec<usize>>,
    open_edges: EdgeSet,
}

impl GreedyAssembler {
    /// Create an assembler with each tile in its own component at the origin
    pub fn new(tile_count: usize) -> Self {
        let mut component_cells = Vec::with_capacity(tile_count);
        let mut component_members = Vec::with_capacity(tile_count);
        for tile in 0..tile_count {
            component_cells.push(HashMap::from([([0, 0], tile)]));
            component_members.push(vec![tile]);
        }

        Self {
            component_ids: (0..tile_count).collect(),
            placements: vec![[0, 0]; tile_count],
            component_cells,
            component_members,
            open_edges: EdgeSet::all_open(tile_count),
        }
    }

    /// Offer one candidate seam, returning whether it was accepted
    ///
    /// A candidate is rejected when either consumed edge is already
    /// closed, when both tiles share a component but the second does not
    /// sit at the seam's offset from the first, or when merging the two
    /// components would place two tiles on the same cell. Acceptance
    /// closes both consumed edges; rejection leaves all state untouched.
    pub fn try_join(&mut self, candidate: &SeamCandidate) -> bool {
        let tile_a = candidate.tile_a;
        let tile_b = candidate.tile_b;
        let relation = candidate.relation;

        if !self.open_edges.is_open(tile_a, relation.source_edge())
            || !self.open_edges.is_open(tile_b, relation.target_edge())
        {
            return false;
        }

        let Some(&component_a) = self.component_ids.get(tile_a) else {
            return false;
        };
        let Some(&component_b) = self.component_ids.get(tile_b) else {
            return false;
        };
        let placement_a = self.placements.get(tile_a).copied().unwrap_or([0, 0]);
        let placement_b = self.placements.get(tile_b).copied().unwrap_or([0, 0]);

        let offset = relation.offset();
        let required_b = [placement_a[0] + offset[0], placement_a[1] + offset[1]];

        if component_a == component_b {
            // Adjacency already produced by earlier merges: confirm it by
            // closing the edges, otherwise the seam is unsatisfiable
            if placement_b == required_b {
                self.close_seam(tile_a, tile_b, relation);
                return true;
            }
            return false;
        }

        // Rigid translation carrying component b's frame onto component a's
        let shift = [
            required_b[0] - placement_b[0],
            required_b[1] - placement_b[1],
        ];

        let Some(cells_b) = self.component_cells.get(component_b) else {
            return false;
        };
        let mut moved = Vec::with_capacity(cells_b.len());
        for (&cell, &tile) in cells_b {
            moved.push(([cell[0] + shift[0], cell[1] + shift[1]], tile));
        }

        let Some(cells_a) = self.component_cells.get(component_a) else {
            return false;
        };
        if moved.iter().any(|(cell, _)| cells_a.contains_key(cell)) {
            return false;
        }

        let Some(members) = self.component_members.get_mut(component_b) else {
            return false;
        };
        let absorbed = std::mem::take(members);
        if let Some(cells) = self.component_cells.get_mut(component_b) {
            cells.clear();
        }

        for &tile in &absorbed {
            if let Some(placement) = self.placements.get_mut(tile) {
                placement[0] += shift[0];
                placement[1] += shift[1];
            }
            if let Some(id) = self.component_ids.get_mut(tile) {
                *id = component_a;
            }
        }
        if let Some(cells) = self.component_cells.get_mut(component_a) {
            for (cell, tile) in moved {
                cells.insert(cell, tile);
            }
        }
        if let Some(members) = self.component_members.get_mut(component_a) {
            members.extend(absorbed);
        }

        self.close_seam(tile_a, tile_b, relation);
        true
    }

    /// Finish assembly, producing the surviving components
    pub fn into_mosaic(self) -> Mosaic {
        let mut layouts = Vec::new();
        for cells in &self.component_cells {
            if cells.is_empty() {
                continue;
            }
            layouts.push(ComponentLayout::from_cells(cells));
        }
        Mosaic::new(layouts)
    }

    fn close_seam(&mut self, tile_a: usize, tile_b: usize, relation: Relation) {
        self.open_edges.close(tile_a, relation.source_edge());
        self.open_edges.close(tile_b, relation.target_edge());
    }
}

/// Assemble a mosaic by offering every ranked candidate in order
pub fn assemble(table: &ScoreTable) -> Mosaic {
    let mut assembler = GreedyAssembler::new(table.tile_count());
    for candidate in table.ranked_candidates() {
        assembler.try_join(&candidate);
    }
    assembler.into_mosaic()
}
