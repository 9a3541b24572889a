//! Mathematical utilities for the painter

/// Separable gaussian filtering, gradients, and luminance extraction
pub mod filter;
/// Importance-weighted location sampling via CDF inversion
pub mod sampling;
