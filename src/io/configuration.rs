//! Solver constants and runtime configuration defaults

// Pixel representation
/// Number of colour channels per pixel
pub const CHANNEL_COUNT: usize = 3;
/// Maximum value of a single colour channel
pub const MAX_CHANNEL_VALUE: i32 = 255;

// Gradient estimation needs an outermost line and one inner neighbour
/// Minimum tile width and height accepted by the solver
pub const MIN_TILE_DIMENSION: usize = 2;

// Numerical tolerance for covariance inversion
/// Determinant magnitude below which a matrix is treated as singular
pub const DETERMINANT_EPSILON: f64 = 1e-9;

// Input settings
/// File extensions recognised when scanning a tile directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "ppm", "pnm", "bmp", "jpg", "jpeg"];

// Output settings
/// Default filename for the reconstructed image
pub const DEFAULT_OUTPUT_NAME: &str = "mosaic.png";
/// Suffix inserted before the extension for secondary components
pub const COMPONENT_SUFFIX: &str = "_component";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
