//! Tests for default values and safety limits

#[cfg(test)]
mod tests {
    use tileplan::io::configuration::{
        DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_GROUT_GAP_MM,
        DEFAULT_SEED, DEFAULT_TILES_PER_BOX, MAX_GRID_DIMENSION, MM_PER_FOOT, MM_PER_METER,
    };

    // Tests the exact foot conversion factor
    // Verified by rounding the factor
    #[test]
    fn test_foot_factor_is_exact() {
        assert!((MM_PER_FOOT - 304.8).abs() < f64::EPSILON);
    }

    // Tests the exact meter conversion factor
    // Verified by changing the factor
    #[test]
    fn test_meter_factor_is_exact() {
        assert!((MM_PER_METER - 1000.0).abs() < f64::EPSILON);
    }

    // Tests the default grout gap
    // Verified by changing the default
    #[test]
    fn test_default_grout_gap() {
        assert!((DEFAULT_GROUT_GAP_MM - 2.0).abs() < f64::EPSILON);
    }

    // Tests the default packaging assumption
    // Verified by changing the box size
    #[test]
    fn test_default_tiles_per_box() {
        assert_eq!(DEFAULT_TILES_PER_BOX, 10);
    }

    // Tests the default pattern builder grid is square
    // Verified by making it rectangular
    #[test]
    fn test_default_grid_dimensions() {
        assert_eq!(DEFAULT_GRID_ROWS, 10);
        assert_eq!(DEFAULT_GRID_COLS, 10);
    }

    // Tests the grid safety cap accommodates the default grid
    // Verified by reducing the cap below the default
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert!(MAX_GRID_DIMENSION >= DEFAULT_GRID_ROWS);
        assert!(MAX_GRID_DIMENSION >= DEFAULT_GRID_COLS);
    }

    // Tests the default seed is fixed
    // Verified by changing the seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests exported cells are visible at the default size
    // Verified by shrinking cells to zero pixels
    #[test]
    fn test_default_cell_size() {
        assert_eq!(DEFAULT_CELL_SIZE_PX, 32);
        assert!(DEFAULT_CELL_SIZE_PX > 0);
    }
}
