//! Tests for solver constants and validation thresholds

#[cfg(test)]
mod tests {
    use jigsolve::io::configuration::{
        CHANNEL_COUNT, COMPONENT_SUFFIX, DEFAULT_OUTPUT_NAME, DETERMINANT_EPSILON,
        MAX_CHANNEL_VALUE, MIN_TILE_DIMENSION, PROGRESS_BAR_WIDTH, SUPPORTED_EXTENSIONS,
    };

    // Tests pixel representation constants
    // Verified by changing constant values
    #[test]
    fn test_pixel_constants() {
        assert_eq!(CHANNEL_COUNT, 3);
        assert_eq!(MAX_CHANNEL_VALUE, 255);
    }

    // Tests the tile minimum leaves room for an outer and inner line
    // Verified by reducing the minimum to one
    #[test]
    fn test_min_tile_dimension() {
        assert_eq!(MIN_TILE_DIMENSION, 2);
    }

    // Tests the singularity threshold is small and positive
    // Verified by zeroing the threshold
    #[test]
    fn test_determinant_epsilon() {
        assert!(DETERMINANT_EPSILON > 0.0);
        assert!(DETERMINANT_EPSILON < 1e-6);
    }

    // Tests the extension list covers common lossless formats
    // Verified by removing entries from the list
    #[test]
    fn test_supported_extensions() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        assert!(SUPPORTED_EXTENSIONS.contains(&"ppm"));
        assert!(SUPPORTED_EXTENSIONS.contains(&"bmp"));

        for extension in SUPPORTED_EXTENSIONS {
            assert!(
                extension.chars().all(|ch| ch.is_ascii_lowercase()),
                "Extensions are matched case-insensitively from lowercase: {extension}"
            );
        }
    }

    // Tests the default output name is a PNG
    // Verified by dropping the extension
    #[test]
    fn test_default_output_name() {
        assert!(DEFAULT_OUTPUT_NAME.ends_with(".png"));
        assert!(!DEFAULT_OUTPUT_NAME.starts_with('.'));
    }

    // Tests filesystem safety of the component suffix
    // Verified by checking each character class
    #[test]
    fn test_component_suffix_format() {
        assert!(COMPONENT_SUFFIX.starts_with('_'));
        assert!(!COMPONENT_SUFFIX.is_empty());
        for ch in COMPONENT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Component suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
