//! Brush texture assets
//!
//! A brush is a small single-channel opacity patch that gets splatted many
//! times onto the canvas. Brushes come from greyscale image files or from a
//! built-in procedural stroke, and are rescaled once per painting pass and
//! rotated once per orientation bin.

/// Precomputed rotated brush variants for oriented painting
pub mod rotation;
/// Brush texture loading, procedural generation, and rescaling
pub mod texture;

pub use rotation::RotationBank;
pub use texture::BrushTexture;
