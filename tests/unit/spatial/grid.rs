//! Tests for component layout normalisation and mosaic ordering

#[cfg(test)]
mod tests {
    use jigsolve::spatial::grid::{ComponentLayout, Mosaic};
    use std::collections::HashMap;

    // Tests signed coordinates normalise to a zero-based bounding box
    // Verified by anchoring at the origin instead of the minimum
    #[test]
    fn test_from_cells_normalises_negative_coordinates() {
        let occupied = HashMap::from([([-1, 2], 7), ([0, 3], 4)]);
        let layout = ComponentLayout::from_cells(&occupied);

        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.cols(), 2);
        assert_eq!(layout.tile_count(), 2);
        assert_eq!(layout.tile_at(0, 0), Some(7));
        assert_eq!(layout.tile_at(1, 1), Some(4));
        assert_eq!(layout.tile_at(0, 1), None, "Unoccupied cell is a hole");
        assert_eq!(layout.tile_at(1, 0), None);
    }

    // Tests the empty component collapses to a zero-sized box
    // Verified by panicking on empty input
    #[test]
    fn test_from_cells_empty() {
        let layout = ComponentLayout::from_cells(&HashMap::new());

        assert_eq!(layout.rows(), 0);
        assert_eq!(layout.cols(), 0);
        assert_eq!(layout.tile_count(), 0);
        assert_eq!(layout.tile_at(0, 0), None);
    }

    // Tests the lowest tile index survives normalisation
    // Verified by tracking the highest index instead
    #[test]
    fn test_lowest_tile_index() {
        let occupied = HashMap::from([([5, 5], 9), ([5, 6], 3), ([6, 5], 12)]);
        let layout = ComponentLayout::from_cells(&occupied);

        assert_eq!(layout.lowest_tile_index(), 3);
    }

    // Tests out-of-range queries return no tile
    // Verified by wrapping coordinates into the box
    #[test]
    fn test_tile_at_out_of_range() {
        let occupied = HashMap::from([([0, 0], 1)]);
        let layout = ComponentLayout::from_cells(&occupied);

        assert_eq!(layout.tile_at(0, 0), Some(1));
        assert_eq!(layout.tile_at(1, 0), None);
        assert_eq!(layout.tile_at(0, 1), None);
    }

    // Tests components order by size then by lowest tile index
    // Verified by sorting ascending on size
    #[test]
    fn test_mosaic_orders_components() {
        let small = ComponentLayout::from_cells(&HashMap::from([([0, 0], 6)]));
        let large = ComponentLayout::from_cells(&HashMap::from([
            ([0, 0], 2),
            ([0, 1], 4),
            ([1, 0], 5),
        ]));
        let other_small = ComponentLayout::from_cells(&HashMap::from([([0, 0], 1)]));

        let mosaic = Mosaic::new(vec![small, large, other_small]);

        let sizes: Vec<usize> = mosaic
            .components()
            .iter()
            .map(ComponentLayout::tile_count)
            .collect();
        assert_eq!(sizes, vec![3, 1, 1]);

        // Equal sizes fall back to the lowest member index
        assert_eq!(mosaic.components()[1].lowest_tile_index(), 1);
        assert_eq!(mosaic.components()[2].lowest_tile_index(), 6);

        assert_eq!(mosaic.principal().unwrap().tile_count(), 3);
        assert_eq!(mosaic.tile_count(), 5);
        assert!(!mosaic.is_complete());
    }

    // Tests completeness for empty and single-component mosaics
    // Verified by requiring exactly one component
    #[test]
    fn test_mosaic_completeness() {
        assert!(Mosaic::new(Vec::new()).is_complete());
        assert!(Mosaic::new(Vec::new()).principal().is_none());

        let single = Mosaic::new(vec![ComponentLayout::from_cells(&HashMap::from([(
            [0, 0],
            0,
        )]))]);
        assert!(single.is_complete());
        assert_eq!(single.tile_count(), 1);
    }
}
