//! Stroke compositing and the single- and multi-scale painters

/// Coarse-to-fine painting orchestration
pub mod multi_scale;
/// One pass of importance-sampled stroke placement
pub mod single_scale;
/// Alpha-composited stroke splatting
pub mod stroke;

pub use multi_scale::TonalOrder;
