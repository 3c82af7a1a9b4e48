//! PNG export of pattern grids
//!
//! Each grid cell becomes a solid square of `cell_size` pixels, giving a swatch
//! image suitable for previewing a fill outside the pattern builder.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{EstimateError, Result, invalid_parameter};
use crate::pattern::grid::{ColorToken, Grid};

/// Export the grid as a PNG image with one solid square per cell
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_size: u32, output_path: &Path) -> Result<()> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"exported cells must be at least one pixel wide",
        ));
    }

    let width = grid.cols() as u32 * cell_size;
    let height = grid.rows() as u32 * cell_size;

    let mut img = ImageBuffer::new(width, height);

    for (pixel_x, pixel_y, pixel) in img.enumerate_pixels_mut() {
        let row = (pixel_y / cell_size) as usize;
        let col = (pixel_x / cell_size) as usize;
        let rgba = grid
            .color_at(row, col)
            .map(ColorToken::rgba)
            .unwrap_or([0, 0, 0, 0]);
        *pixel = Rgba(rgba);
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EstimateError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| EstimateError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
