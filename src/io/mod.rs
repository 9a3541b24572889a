//! Input/output operations: image decoding and export, the batch CLI,
//! progress display, configuration defaults, and the crate error type

/// Command-line interface and batch file processing
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Error types for painting operations
pub mod error;
/// Image decoding into float arrays and PNG export
pub mod image;
/// Progress display for batch painting runs
pub mod progress;
