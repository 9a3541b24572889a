//! Separable gaussian filtering, gradients, and luminance extraction
//!
//! All filters clamp to the nearest edge pixel rather than wrapping or
//! zero-padding, so flat regions stay flat right up to the border.

use ndarray::{Array2, Array3};

// Luminance weights for stroke color and tensor computation
const LUMA_WEIGHTS: [f64; 3] = [0.3, 0.6, 0.1];

/// Collapse an image to a single luminance channel
///
/// Single-channel input is passed through unchanged; extra channels beyond
/// the third are ignored.
pub fn luminance(im: &Array3<f64>) -> Array2<f64> {
    let (height, width, channels) = im.dim();
    let mut lumi = Array2::zeros((height, width));

    if channels == 1 {
        for y in 0..height {
            for x in 0..width {
                lumi[[y, x]] = im[[y, x, 0]];
            }
        }
        return lumi;
    }

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (c, weight) in LUMA_WEIGHTS.iter().enumerate().take(channels) {
                acc = weight.mul_add(im[[y, x, c]], acc);
            }
            lumi[[y, x]] = acc;
        }
    }
    lumi
}

/// Luminance of a single color sample
pub fn color_luminance(color: &[f64; 3]) -> f64 {
    LUMA_WEIGHTS
        .iter()
        .zip(color.iter())
        .fold(0.0, |acc, (weight, value)| weight.mul_add(*value, acc))
}

/// Build a normalized 1D gaussian kernel truncated at `truncate` sigmas
///
/// Returns the kernel taps from `-radius` to `+radius`; the radius is at
/// least one tap so the kernel is never a bare impulse for positive sigma.
pub fn gaussian_kernel(sigma: f64, truncate: f64) -> Vec<f64> {
    let radius = (sigma * truncate).ceil().max(1.0) as usize;
    let denom = 2.0 * sigma * sigma;

    let mut taps: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let offset = i as f64 - radius as f64;
            (-offset * offset / denom).exp()
        })
        .collect();

    let total: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= total;
    }
    taps
}

/// Separable gaussian blur with clamp-to-edge boundary handling
///
/// A non-positive sigma returns the input unchanged.
pub fn gaussian_blur(im: &Array2<f64>, sigma: f64, truncate: f64) -> Array2<f64> {
    if sigma <= 0.0 {
        return im.clone();
    }

    let kernel = gaussian_kernel(sigma, truncate);
    let radius = kernel.len() / 2;
    let (height, width) = im.dim();

    let mut horizontal = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (i, tap) in kernel.iter().enumerate() {
                let offset = i as i64 - radius as i64;
                let sx = (x as i64 + offset).clamp(0, width as i64 - 1) as usize;
                acc = tap.mul_add(im[[y, sx]], acc);
            }
            horizontal[[y, x]] = acc;
        }
    }

    let mut blurred = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (i, tap) in kernel.iter().enumerate() {
                let offset = i as i64 - radius as i64;
                let sy = (y as i64 + offset).clamp(0, height as i64 - 1) as usize;
                acc = tap.mul_add(horizontal[[sy, x]], acc);
            }
            blurred[[y, x]] = acc;
        }
    }
    blurred
}

/// Horizontal central-difference gradient with clamped borders
pub fn gradient_x(im: &Array2<f64>) -> Array2<f64> {
    let (height, width) = im.dim();
    let mut grad = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let left = x.saturating_sub(1);
            let right = (x + 1).min(width - 1);
            grad[[y, x]] = (im[[y, right]] - im[[y, left]]) / 2.0;
        }
    }
    grad
}

/// Vertical central-difference gradient with clamped borders
pub fn gradient_y(im: &Array2<f64>) -> Array2<f64> {
    let (height, width) = im.dim();
    let mut grad = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let up = y.saturating_sub(1);
            let down = (y + 1).min(height - 1);
            grad[[y, x]] = (im[[down, x]] - im[[up, x]]) / 2.0;
        }
    }
    grad
}
