//! Tests for error construction and display

#[cfg(test)]
mod tests {
    use crate::io::error::{PaintError, invalid_parameter, shape_mismatch};

    #[test]
    fn test_invalid_parameter_message_names_the_parameter() {
        let err = invalid_parameter("noise", &1.5, &"noise fraction must lie in [0, 1]");
        let message = err.to_string();
        assert!(message.contains("noise"));
        assert!(message.contains("1.5"));
    }

    #[test]
    fn test_shape_mismatch_reports_both_shapes() {
        let err = shape_mismatch("importance map vs source", (10, 20), (10, 19));
        let message = err.to_string();
        assert!(message.contains("10x20"));
        assert!(message.contains("10x19"));
    }

    #[test]
    fn test_io_errors_convert_with_placeholder_path() {
        let io_err = std::io::Error::other("disk on fire");
        let err: PaintError = io_err.into();
        assert!(matches!(err, PaintError::FileSystem { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        use std::error::Error;
        let err = PaintError::FileSystem {
            path: "out/painting.png".into(),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(err.source().is_some());
    }
}
