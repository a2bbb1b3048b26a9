//! Tile loading from a directory of image files

use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, SolverError};
use crate::spatial::{TileSet, tiles::Tile};

/// Convert a decoded image into a tile
///
/// The image is flattened to RGB; alpha, palettes and wider bit depths
/// are handled by the decoder before conversion.
pub fn tile_from_image(image: &DynamicImage) -> Tile {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let mut tile = Tile::filled(height, width, [0, 0, 0]);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let channels = pixel.0;
        tile.set_pixel(
            y as usize,
            x as usize,
            [
                i32::from(channels[0]),
                i32::from(channels[1]),
                i32::from(channels[2]),
            ],
        );
    }
    tile
}

/// Load every supported image in `directory` as a tile set
///
/// Files are taken in lexicographic filename order, so zero-padded
/// numbering like `0000.ppm` keeps its intended sequence. Files with
/// unsupported extensions and subdirectories are skipped.
///
/// # Errors
///
/// Returns [`SolverError::FileSystem`] when the directory cannot be
/// read, [`SolverError::ImageLoad`] when a candidate file fails to
/// decode, and tile-set validation errors when the decoded tiles are
/// unusable.
pub fn load_tile_set(directory: &Path) -> Result<TileSet> {
    let entries = std::fs::read_dir(directory).map_err(|e| SolverError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SolverError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let supported = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|candidate| extension.eq_ignore_ascii_case(candidate))
            });
        if supported {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tiles = Vec::with_capacity(paths.len());
    for path in &paths {
        let image = image::open(path).map_err(|e| SolverError::ImageLoad {
            path: path.clone(),
            source: e,
        })?;
        tiles.push(tile_from_image(&image));
    }

    TileSet::new(tiles)
}
