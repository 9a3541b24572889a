//! Precomputed rotated brush variants for oriented painting
//!
//! Rotating the texture per stroke would dominate the cost of an oriented
//! pass, so the bank rotates it once per angle bin up front and each stroke
//! picks the nearest bin. Stroke orientation is symmetric under a half
//! turn, so the bins cover `[0, π)` rather than the full circle.

use crate::brush::texture::{BrushTexture, bilinear};
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;
use std::f64::consts::PI;

/// A set of rotated copies of one brush texture
#[derive(Debug, Clone)]
pub struct RotationBank {
    base: BrushTexture,
    variants: Vec<BrushTexture>,
}

impl RotationBank {
    /// Precompute `n_angles` rotations of `texture` over the half turn
    ///
    /// Bin `i` holds the texture rotated by `π·i / n_angles`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_angles` is zero or a rotated patch fails
    /// validation.
    pub fn new(texture: &BrushTexture, n_angles: usize) -> Result<Self> {
        if n_angles == 0 {
            return Err(invalid_parameter(
                "n_angles",
                &n_angles,
                &"at least one rotation bin is required",
            ));
        }

        let mut variants = Vec::with_capacity(n_angles);
        for i in 0..n_angles {
            let theta = PI * i as f64 / n_angles as f64;
            variants.push(BrushTexture::from_opacity(rotate_opacity(
                texture.opacity(),
                theta,
            ))?);
        }

        Ok(Self {
            base: texture.clone(),
            variants,
        })
    }

    /// Number of rotation bins
    pub fn bins(&self) -> usize {
        self.variants.len()
    }

    /// The variant whose bin is nearest to `theta`, folded into `[0, π)`
    pub fn nearest(&self, theta: f64) -> &BrushTexture {
        let folded = theta.rem_euclid(PI);
        let bin = ((folded / PI * self.variants.len() as f64).round() as usize)
            % self.variants.len().max(1);
        self.variants.get(bin).unwrap_or(&self.base)
    }
}

// Rotate an opacity patch counterclockwise by theta, expanding the canvas
// to the diagonal so no corner is clipped. Samples outside the source are
// transparent.
fn rotate_opacity(opacity: &Array2<f64>, theta: f64) -> Array2<f64> {
    let (height, width) = opacity.dim();
    let side = (height as f64).hypot(width as f64).ceil() as usize;

    let cy_out = (side as f64 - 1.0) / 2.0;
    let cx_out = cy_out;
    let cy_in = (height as f64 - 1.0) / 2.0;
    let cx_in = (width as f64 - 1.0) / 2.0;
    let (sin, cos) = theta.sin_cos();

    let mut rotated = Array2::zeros((side, side));
    for y in 0..side {
        for x in 0..side {
            let dy = y as f64 - cy_out;
            let dx = x as f64 - cx_out;

            // Inverse mapping: rotate the output offset back into the source
            let sx = dx.mul_add(cos, dy * sin) + cx_in;
            let sy = dy.mul_add(cos, -dx * sin) + cy_in;

            if (-0.5..=height as f64 - 0.5).contains(&sy)
                && (-0.5..=width as f64 - 0.5).contains(&sx)
            {
                rotated[[y, x]] = bilinear(opacity, sy, sx);
            }
        }
    }
    rotated
}
