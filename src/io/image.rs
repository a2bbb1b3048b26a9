//! Mosaic rendering and PNG export

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

use crate::io::configuration::{COMPONENT_SUFFIX, MAX_CHANNEL_VALUE};
use crate::io::error::{Result, SolverError};
use crate::spatial::TileSet;
use crate::spatial::grid::ComponentLayout;

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL_VALUE) as u8
}

/// Render a component layout into a pixel buffer
///
/// Each grid cell becomes a tile-sized block. Holes in the bounding box
/// stay black.
pub fn render_component(layout: &ComponentLayout, tiles: &TileSet) -> RgbImage {
    let tile_height = tiles.tile_height();
    let tile_width = tiles.tile_width();
    let height = (layout.rows() * tile_height) as u32;
    let width = (layout.cols() * tile_width) as u32;

    let mut image = RgbImage::new(width, height);

    for row in 0..layout.rows() {
        for col in 0..layout.cols() {
            let Some(tile_index) = layout.tile_at(row, col) else {
                continue;
            };
            let Some(tile) = tiles.tile(tile_index) else {
                continue;
            };

            for pixel_row in 0..tile_height {
                for pixel_col in 0..tile_width {
                    let pixel = tile.pixel(pixel_row, pixel_col);
                    let x = (col * tile_width + pixel_col) as u32;
                    let y = (row * tile_height + pixel_row) as u32;
                    image.put_pixel(
                        x,
                        y,
                        Rgb([
                            clamp_channel(pixel[0]),
                            clamp_channel(pixel[1]),
                            clamp_channel(pixel[2]),
                        ]),
                    );
                }
            }
        }
    }

    image
}

/// Render a component and write it to `path`
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`SolverError::FileSystem`] when the parent directory cannot
/// be created and [`SolverError::ImageExport`] when encoding or writing
/// fails.
pub fn export_component(layout: &ComponentLayout, tiles: &TileSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    render_component(layout, tiles)
        .save(path)
        .map_err(|e| SolverError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Output path for a secondary component
///
/// `mosaic.png` with component number 1 becomes `mosaic_component1.png`.
pub fn component_output_path(base: &Path, component_number: usize) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default();
    let extension = base.extension().unwrap_or_default();

    let name = if extension.is_empty() {
        format!(
            "{}{COMPONENT_SUFFIX}{component_number}",
            stem.to_string_lossy()
        )
    } else {
        format!(
            "{}{COMPONENT_SUFFIX}{component_number}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        )
    };

    if let Some(parent) = base.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
