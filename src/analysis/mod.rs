//! Image analysis driving stroke placement and orientation
//!
//! The sharpness map concentrates detail strokes where the source image has
//! high-frequency energy; the structure tensor supplies a per-pixel edge
//! orientation for rotating brushes along local structure.

/// High-frequency energy estimation for detail-pass importance maps
pub mod sharpness;
/// Structure tensor computation and orientation extraction
pub mod tensor;
