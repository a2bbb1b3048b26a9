//! Assembled component layouts and the mosaic result
//!
//! Assembly works in unbounded signed coordinates; layouts normalise each
//! component so its occupied bounding box starts at row 0, column 0. The
//! mosaic orders components largest first so callers can treat the head
//! of the list as the reconstruction.

use ndarray::Array2;
use std::collections::HashMap;

/// One rigid group of assembled tiles on a normalised grid
///
/// Cells inside the bounding box that no tile reached stay `None` and
/// render as holes.
#[derive(Debug, Clone)]
pub struct ComponentLayout {
    cells: Array2<Option<usize>>,
    tile_count: usize,
    lowest_tile_index: usize,
}

impl ComponentLayout {
    /// Build a layout from occupied cells keyed by signed grid position
    pub fn from_cells(occupied: &HashMap<[i32; 2], usize>) -> Self {
        if occupied.is_empty() {
            return Self {
                cells: Array2::from_elem((0, 0), None),
                tile_count: 0,
                lowest_tile_index: 0,
            };
        }

        let mut min = [i32::MAX, i32::MAX];
        let mut max = [i32::MIN, i32::MIN];
        for position in occupied.keys() {
            min[0] = min[0].min(position[0]);
            min[1] = min[1].min(position[1]);
            max[0] = max[0].max(position[0]);
            max[1] = max[1].max(position[1]);
        }

        let rows = (max[0] - min[0] + 1) as usize;
        let cols = (max[1] - min[1] + 1) as usize;
        let mut cells = Array2::from_elem((rows, cols), None);
        for (&position, &tile) in occupied {
            let row = (position[0] - min[0]) as usize;
            let col = (position[1] - min[1]) as usize;
            if let Some(cell) = cells.get_mut([row, col]) {
                *cell = Some(tile);
            }
        }

        Self {
            cells,
            tile_count: occupied.len(),
            lowest_tile_index: occupied.values().copied().min().unwrap_or(0),
        }
    }

    /// Number of grid rows in the bounding box
    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of grid columns in the bounding box
    pub fn cols(&self) -> usize {
        self.cells.dim().1
    }

    /// Number of tiles placed in this component
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Smallest tile index present, used to order equally sized components
    pub const fn lowest_tile_index(&self) -> usize {
        self.lowest_tile_index
    }

    /// Tile occupying `row`, `col`, or `None` for holes and out-of-range
    /// positions
    pub fn tile_at(&self, row: usize, col: usize) -> Option<usize> {
        self.cells.get([row, col]).copied().flatten()
    }
}

/// Result of greedy assembly
///
/// Components are sorted by descending tile count, with equal sizes
/// ordered by their lowest tile index. A fully reconstructed image is a
/// mosaic with a single component.
#[derive(Debug, Clone)]
pub struct Mosaic {
    components: Vec<ComponentLayout>,
}

impl Mosaic {
    /// Wrap and order a set of component layouts
    pub fn new(mut components: Vec<ComponentLayout>) -> Self {
        components.sort_by(|a, b| {
            b.tile_count()
                .cmp(&a.tile_count())
                .then_with(|| a.lowest_tile_index().cmp(&b.lowest_tile_index()))
        });
        Self { components }
    }

    /// All components, principal first
    pub fn components(&self) -> &[ComponentLayout] {
        &self.components
    }

    /// The largest component, if any tiles were assembled
    pub fn principal(&self) -> Option<&ComponentLayout> {
        self.components.first()
    }

    /// Total tiles across every component
    pub fn tile_count(&self) -> usize {
        self.components.iter().map(ComponentLayout::tile_count).sum()
    }

    /// Whether assembly connected everything into at most one component
    pub fn is_complete(&self) -> bool {
        self.components.len() <= 1
    }
}
