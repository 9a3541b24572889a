//! Rendering constants and runtime configuration defaults

// Stroke placement defaults, matched to a roughly 512px source image
/// Default stroke count per painting pass
pub const DEFAULT_STROKES: usize = 10_000;

/// Default stroke count for oriented painting modes
pub const DEFAULT_ORIENTED_STROKES: usize = 7_000;

/// Default longest side of a coarse-pass stroke in pixels
pub const DEFAULT_STROKE_SIZE: usize = 50;

/// Default multiplicative color noise fraction
pub const DEFAULT_NOISE: f64 = 0.3;

/// Detail passes shrink the stroke size by this divisor
pub const DETAIL_SIZE_DIVISOR: usize = 4;

// Orientation settings
/// Number of precomputed brush rotations over the half-turn
pub const DEFAULT_ANGLE_BINS: usize = 36;

/// Blur applied to the luminance before taking gradients
pub const TENSOR_SIGMA: f64 = 3.0;

/// The tensor itself is smoothed at `TENSOR_SIGMA` times this factor
pub const TENSOR_SIGMA_FACTOR: f64 = 5.0;

// Sharpness map settings
/// High-pass sigma for the sharpness importance map
pub const SHARPNESS_SIGMA: f64 = 1.0;

/// Gaussian kernels extend this many sigmas before truncation
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// The high-pass energy is smoothed at `SHARPNESS_SIGMA` times this factor
pub const SHARPNESS_SMOOTHING_FACTOR: f64 = 4.0;

/// Default number of detail scales for multi-scale oriented painting
pub const DEFAULT_DETAIL_SCALES: usize = 2;

// Procedural brush dimensions; elongated so that orientation reads clearly
/// Height of the built-in procedural brush
pub const PROCEDURAL_BRUSH_HEIGHT: usize = 32;

/// Width of the built-in procedural brush
pub const PROCEDURAL_BRUSH_WIDTH: usize = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible painting
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_painted";
