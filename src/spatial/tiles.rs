//! Tile data structures and validated tile-set construction
//!
//! Tiles carry signed channel values so that downstream gradient and
//! difference arithmetic never wraps. A tile set guarantees uniform
//! dimensions and the minimum size required by gradient estimation.

use ndarray::Array3;

use crate::io::configuration::{CHANNEL_COUNT, MIN_TILE_DIMENSION};
use crate::io::error::{Result, SolverError};

/// A single RGB pixel with signed channel values
pub type Pixel = [i32; 3];

/// A rectangular block of pixels cut from the source image
///
/// Stored as `height x width x channel`. Out-of-range reads return zero
/// and out-of-range writes are ignored, so callers can iterate without
/// bounds plumbing.
#[derive(Debug, Clone)]
pub struct Tile {
    pixels: Array3<i32>,
}

impl Tile {
    /// Create a tile filled with a single pixel value
    pub fn filled(height: usize, width: usize, fill: Pixel) -> Self {
        let mut pixels = Array3::zeros((height, width, CHANNEL_COUNT));
        for ((_, _, channel), value) in pixels.indexed_iter_mut() {
            *value = fill.get(channel).copied().unwrap_or(0);
        }
        Self { pixels }
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Pixel at `row`, `col`, or black when out of range
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        [
            self.pixels.get((row, col, 0)).copied().unwrap_or(0),
            self.pixels.get((row, col, 1)).copied().unwrap_or(0),
            self.pixels.get((row, col, 2)).copied().unwrap_or(0),
        ]
    }

    /// Overwrite the pixel at `row`, `col`, ignoring out-of-range writes
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        for (channel, &value) in pixel.iter().enumerate() {
            if let Some(entry) = self.pixels.get_mut((row, col, channel)) {
                *entry = value;
            }
        }
    }
}

/// An immutable, validated collection of equally sized tiles
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    tile_height: usize,
    tile_width: usize,
}

impl TileSet {
    /// Validate and wrap a collection of tiles
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidTileSet`] when no tiles are provided,
    /// or [`SolverError::MalformedTile`] when a tile is smaller than the
    /// gradient minimum or differs in size from the first tile.
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(SolverError::InvalidTileSet {
                reason: "no tiles provided".to_string(),
            });
        };

        let tile_height = first.height();
        let tile_width = first.width();

        for (index, tile) in tiles.iter().enumerate() {
            let height = tile.height();
            let width = tile.width();

            if height < MIN_TILE_DIMENSION || width < MIN_TILE_DIMENSION {
                return Err(SolverError::MalformedTile {
                    index,
                    reason: format!(
                        "{height}x{width} is below the \
                         {MIN_TILE_DIMENSION}x{MIN_TILE_DIMENSION} minimum"
                    ),
                });
            }

            if height != tile_height || width != tile_width {
                return Err(SolverError::MalformedTile {
                    index,
                    reason: format!(
                        "expected {tile_height}x{tile_width}, found {height}x{width}"
                    ),
                });
            }
        }

        Ok(Self {
            tiles,
            tile_height,
            tile_width,
        })
    }

    /// Number of tiles in the set
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set contains no tiles
    ///
    /// Always false for a constructed set; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `index`, if present
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in load order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Height shared by every tile
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Width shared by every tile
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }
}
