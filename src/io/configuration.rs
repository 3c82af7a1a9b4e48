//! Default values and safety limits

// Unit conversion factors, both exact
/// Millimeters per foot
pub const MM_PER_FOOT: f64 = 304.8;
/// Millimeters per meter
pub const MM_PER_METER: f64 = 1000.0;

/// Default grout joint width added to each tile edge
pub const DEFAULT_GROUT_GAP_MM: f64 = 2.0;

// Simplifying packaging assumption, not a manufacturer figure
/// Default number of tiles per box
pub const DEFAULT_TILES_PER_BOX: u64 = 10;

// Pattern builder defaults
/// Default grid height in cells
pub const DEFAULT_GRID_ROWS: usize = 10;
/// Default grid width in cells
pub const DEFAULT_GRID_COLS: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible randomized fills
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Edge length in pixels of one exported grid cell
pub const DEFAULT_CELL_SIZE_PX: u32 = 32;
