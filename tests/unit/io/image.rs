//! Tests for PNG export of pattern grids

#[cfg(test)]
mod tests {
    use tileplan::io::image::export_grid_as_png;
    use tileplan::pattern::grid::{ColorToken, Grid};
    use tileplan::pattern::layout::{Layout, apply_layout};

    // Tests exported image dimensions scale with the cell size
    // Verified by exporting one pixel per cell regardless of cell size
    #[test]
    fn test_export_dimensions_scale_with_cell_size() {
        let grid = Grid::new(3, 5, ColorToken::Sand).expect("grid creation should succeed");
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let output_path = dir.path().join("swatch.png");

        export_grid_as_png(&grid, 4, &output_path).expect("PNG export should succeed");

        let exported = image::open(&output_path).expect("exported PNG should reopen");
        assert_eq!(exported.width(), 20);
        assert_eq!(exported.height(), 12);
    }

    // Tests exported pixels carry the cell's swatch color
    // Verified by exporting the default fill for every cell
    #[test]
    fn test_export_pixels_match_cells() {
        let mut grid = Grid::default();
        apply_layout(
            &mut grid,
            Layout::Checkerboard,
            &[ColorToken::White, ColorToken::Navy],
        )
        .expect("apply_layout should succeed");

        let dir = tempfile::tempdir().expect("temp dir should be created");
        let output_path = dir.path().join("checkerboard.png");
        export_grid_as_png(&grid, 2, &output_path).expect("PNG export should succeed");

        let exported = image::open(&output_path)
            .expect("exported PNG should reopen")
            .to_rgba8();

        // Cell (0,0) is the navy accent; cell (0,1) starts at pixel column 2
        assert_eq!(exported.get_pixel(0, 0).0, ColorToken::Navy.rgba());
        assert_eq!(exported.get_pixel(2, 0).0, ColorToken::White.rgba());
        assert_eq!(exported.get_pixel(0, 2).0, ColorToken::White.rgba());
    }

    // Tests missing parent directories are created on export
    // Verified by saving without the directory step
    #[test]
    fn test_export_creates_parent_directories() {
        let grid = Grid::default();
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let output_path = dir.path().join("nested/deeper/pattern.png");

        export_grid_as_png(&grid, 1, &output_path).expect("PNG export should succeed");
        assert!(output_path.exists());
    }

    // Tests a zero cell size is rejected before any file is touched
    // Verified by allowing a zero-sized image buffer
    #[test]
    fn test_zero_cell_size_is_rejected() {
        let grid = Grid::default();
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let output_path = dir.path().join("empty.png");

        let result = export_grid_as_png(&grid, 0, &output_path);
        assert!(result.is_err(), "zero-pixel cells should be rejected");
        assert!(!output_path.exists());
    }
}
