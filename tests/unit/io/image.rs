//! Tests for mosaic rendering, PNG export and component path naming

#[cfg(test)]
mod tests {
    use jigsolve::io::image::{component_output_path, export_component, render_component};
    use jigsolve::spatial::TileSet;
    use jigsolve::spatial::grid::ComponentLayout;
    use jigsolve::spatial::tiles::Tile;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn two_tile_set() -> TileSet {
        TileSet::new(vec![
            Tile::filled(2, 2, [255, 0, 0]),
            Tile::filled(2, 2, [0, 0, 255]),
        ])
        .unwrap()
    }

    // Tests each grid cell renders as a tile-sized block
    // Verified by rendering one pixel per cell
    #[test]
    fn test_render_component_blocks() {
        let tiles = two_tile_set();
        let layout = ComponentLayout::from_cells(&HashMap::from([([0, 0], 0), ([0, 1], 1)]));

        let image = render_component(&layout, &tiles);

        assert_eq!(image.width(), 4, "Two columns of 2-wide tiles");
        assert_eq!(image.height(), 2);
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(2, 0).0, [0, 0, 255]);
        assert_eq!(image.get_pixel(3, 1).0, [0, 0, 255]);
    }

    // Tests holes in the bounding box stay black
    // Verified by filling holes with the first tile
    #[test]
    fn test_render_component_holes_black() {
        let tiles = two_tile_set();
        let layout = ComponentLayout::from_cells(&HashMap::from([([0, 0], 0), ([1, 1], 1)]));

        let image = render_component(&layout, &tiles);

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(3, 3).0, [0, 0, 255]);
        assert_eq!(image.get_pixel(2, 0).0, [0, 0, 0], "Hole cell stays black");
        assert_eq!(image.get_pixel(0, 2).0, [0, 0, 0]);
    }

    // Tests channel values clamp into displayable range
    // Verified by casting channels without clamping
    #[test]
    fn test_render_component_clamps_channels() {
        let tiles = TileSet::new(vec![Tile::filled(2, 2, [300, -40, 128])]).unwrap();
        let layout = ComponentLayout::from_cells(&HashMap::from([([0, 0], 0)]));

        let image = render_component(&layout, &tiles);
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 128]);
    }

    // Tests export writes a decodable file and creates parents
    // Verified by disabling directory creation
    #[test]
    fn test_export_component_creates_file() {
        let tiles = two_tile_set();
        let layout = ComponentLayout::from_cells(&HashMap::from([([0, 0], 0)]));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.png");

        export_component(&layout, &tiles, &path).unwrap();
        assert!(path.exists());

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!((reloaded.width(), reloaded.height()), (2, 2));
        assert_eq!(reloaded.get_pixel(0, 0).0, [255, 0, 0]);
    }

    // Tests secondary component paths keep stem, suffix and extension
    // Verified by appending the number after the extension
    #[test]
    fn test_component_output_path() {
        assert_eq!(
            component_output_path(Path::new("mosaic.png"), 1),
            PathBuf::from("mosaic_component1.png")
        );
        assert_eq!(
            component_output_path(Path::new("out/result.png"), 2),
            PathBuf::from("out/result_component2.png")
        );
        assert_eq!(
            component_output_path(Path::new("bare"), 3),
            PathBuf::from("bare_component3")
        );
    }
}
