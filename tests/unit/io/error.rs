//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tileplan::EstimateError;
    use tileplan::io::error::invalid_parameter;

    // Tests missing information messages name the field
    // Verified by omitting the field from the message
    #[test]
    fn test_missing_information_message() {
        let error = EstimateError::MissingInformation { field: "width" };
        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("Missing information"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tiles_per_box", &0, &"a box must hold at least one tile");
        let message = error.to_string();
        assert!(message.contains("tiles_per_box"));
        assert!(message.contains('0'));
        assert!(message.contains("at least one tile"));
    }

    // Tests cell bound errors report both the index and the grid size
    // Verified by omitting the cell count
    #[test]
    fn test_cell_out_of_bounds_error() {
        let error = EstimateError::CellOutOfBounds {
            index: 120,
            cell_count: 100,
        };
        let message = error.to_string();
        assert!(message.contains("120"));
        assert!(message.contains("100"));
    }

    // Tests palette errors report the layout and both lengths
    // Verified by omitting the provided length
    #[test]
    fn test_palette_too_small_error() {
        let error = EstimateError::PaletteTooSmall {
            layout: "brick",
            required: 3,
            provided: 2,
        };
        let message = error.to_string();
        assert!(message.contains("brick"));
        assert!(message.contains('3'));
        assert!(message.contains('2'));
    }

    // Tests error source chaining for filesystem failures
    // Verified by breaking the source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = EstimateError::FileSystem {
            path: "/tmp/pattern.png".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/pattern.png"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = EstimateError::ImageExport {
            path: PathBuf::from("/restricted/pattern.png"),
            source: image_error,
        };

        assert!(error.to_string().contains("/restricted/pattern.png"));
        assert!(error.source().is_some());
    }

    // Tests blanket conversions tag unknown paths explicitly
    // Verified by leaving the path empty
    #[test]
    fn test_from_io_error_conversion() {
        let io_error = std::io::Error::other("disk on fire");
        let error: EstimateError = io_error.into();
        assert!(error.to_string().contains("<unknown>"));
    }
}
