//! High-frequency energy estimation for detail-pass importance maps

use crate::io::configuration::SHARPNESS_SMOOTHING_FACTOR;
use crate::io::error::{Result, invalid_parameter};
use crate::math::filter::{gaussian_blur, luminance};
use ndarray::{Array2, Array3};

/// Uniform importance map: every pixel equally likely
pub fn uniform_importance(height: usize, width: usize) -> Array2<f64> {
    Array2::ones((height, width))
}

/// Measure local high-frequency energy of an image
///
/// The luminance is high-pass filtered by subtracting a gaussian blur at
/// `sigma`, the residual is squared, and the energy is smoothed at a wider
/// sigma so isolated speckle does not dominate. The result is normalized to
/// a maximum of one; a flat image yields an all-zero map, which callers
/// must treat as "no detail anywhere" rather than feed to a sampler.
///
/// # Errors
///
/// Returns an error if `sigma` or `truncate` is not positive.
pub fn sharpness_map(im: &Array3<f64>, sigma: f64, truncate: f64) -> Result<Array2<f64>> {
    if sigma <= 0.0 {
        return Err(invalid_parameter(
            "sigma",
            &sigma,
            &"blur sigma must be positive",
        ));
    }
    if truncate <= 0.0 {
        return Err(invalid_parameter(
            "truncate",
            &truncate,
            &"kernel truncation must be positive",
        ));
    }

    let lumi = luminance(im);
    let blurred = gaussian_blur(&lumi, sigma, truncate);

    let mut energy = &lumi - &blurred;
    energy.mapv_inplace(|v| v * v);

    let mut sharpness = gaussian_blur(&energy, SHARPNESS_SMOOTHING_FACTOR * sigma, truncate);

    let peak = sharpness.iter().copied().fold(0.0_f64, f64::max);
    if peak > 0.0 {
        sharpness.mapv_inplace(|v| v / peak);
    }
    Ok(sharpness)
}
