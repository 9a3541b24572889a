//! Painterly rendering through importance-sampled brush strokes
//!
//! The system splats many small textured strokes onto a blank canvas,
//! sampling stroke locations from an importance map and stroke colors from
//! the source image. Coarse-to-fine passes block in broad strokes first and
//! then add detail where the source carries high-frequency energy, with
//! optional stroke orientation following the local structure tensor.

#![forbid(unsafe_code)]

/// Sharpness estimation and structure-tensor orientation analysis
pub mod analysis;
/// Brush texture assets: loading, procedural generation, scaling, rotation
pub mod brush;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for filtering and weighted sampling
pub mod math;
/// Stroke compositing and the single- and multi-scale painters
pub mod render;

pub use io::error::{PaintError, Result};
