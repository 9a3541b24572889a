//! Error types for painting operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all painting operations
#[derive(Debug)]
pub enum PaintError {
    /// Failed to load a source image or brush texture from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Two arrays that must share spatial dimensions do not
    ///
    /// Raised at call time when a canvas, importance map, or orientation
    /// map disagrees with the source image about height or width.
    ShapeMismatch {
        /// Which pair of arrays disagreed
        context: &'static str,
        /// Expected (height, width)
        expected: (usize, usize),
        /// Actual (height, width)
        actual: (usize, usize),
    },

    /// Importance map defines no valid probability distribution
    ///
    /// All weights are zero (or the map is empty), so there is nothing
    /// to normalize and location sampling is undefined.
    DegenerateImportance {
        /// Sum of all weights in the rejected map
        total: f64,
    },

    /// Rendering parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ShapeMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch for {context}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::DegenerateImportance { total } => {
                write!(
                    f,
                    "Importance map has no positive weight (total = {total}); \
                     location sampling is undefined"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PaintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for painting results
pub type Result<T> = std::result::Result<T, PaintError>;

impl From<image::ImageError> for PaintError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PaintError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PaintError {
    PaintError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error
pub const fn shape_mismatch(
    context: &'static str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> PaintError {
    PaintError::ShapeMismatch {
        context,
        expected,
        actual,
    }
}

/// Create a generic I/O error for path validation failures
pub fn io_error(msg: &str) -> PaintError {
    PaintError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
