//! Structure tensor computation and orientation extraction
//!
//! The tensor at a pixel is the blurred outer product of the luminance
//! gradient with itself. Its eigenvector for the smallest eigenvalue points
//! along the direction of least intensity variation, which for an edge
//! pixel runs along the edge. Strokes rotated to that direction follow
//! local image structure.

use crate::io::error::{Result, invalid_parameter};
use crate::math::filter::{gaussian_blur, gradient_x, gradient_y, luminance};
use ndarray::{Array2, Array3};
use std::f64::consts::PI;

// A 2x2 symmetric eigenproblem has a closed form; below this the matrix is
// treated as diagonal to avoid atan2 on numerical dust
const OFF_DIAGONAL_EPSILON: f64 = 1e-12;

/// Per-pixel structure tensor components `(Ix², Ix·Iy, Iy²)`
///
/// The luminance is pre-blurred at `sigma` before gradients are taken, and
/// each tensor component is smoothed again at `sigma * factor` so the
/// orientation field varies slowly across stroke-sized neighborhoods.
///
/// # Errors
///
/// Returns an error if `sigma` or `factor` is not positive.
pub fn compute_tensor(im: &Array3<f64>, sigma: f64, factor: f64) -> Result<Array3<f64>> {
    if sigma <= 0.0 {
        return Err(invalid_parameter(
            "sigma",
            &sigma,
            &"tensor sigma must be positive",
        ));
    }
    if factor <= 0.0 {
        return Err(invalid_parameter(
            "factor",
            &factor,
            &"tensor smoothing factor must be positive",
        ));
    }

    let truncate = crate::io::configuration::GAUSSIAN_TRUNCATE;
    let lumi = gaussian_blur(&luminance(im), sigma, truncate);
    let gx = gradient_x(&lumi);
    let gy = gradient_y(&lumi);

    let (height, width) = lumi.dim();
    let mut xx = Array2::zeros((height, width));
    let mut xy = Array2::zeros((height, width));
    let mut yy = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let ix = gx[[y, x]];
            let iy = gy[[y, x]];
            xx[[y, x]] = ix * ix;
            xy[[y, x]] = ix * iy;
            yy[[y, x]] = iy * iy;
        }
    }

    let xx = gaussian_blur(&xx, sigma * factor, truncate);
    let xy = gaussian_blur(&xy, sigma * factor, truncate);
    let yy = gaussian_blur(&yy, sigma * factor, truncate);

    let mut tensor = Array3::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            tensor[[y, x, 0]] = xx[[y, x]];
            tensor[[y, x, 1]] = xy[[y, x]];
            tensor[[y, x, 2]] = yy[[y, x]];
        }
    }
    Ok(tensor)
}

/// Per-pixel orientation of minimal intensity variation, in `[0, π)`
///
/// Extracts the smallest-eigenvalue eigenvector of the structure tensor at
/// each pixel and returns its angle against the x axis, folded into the
/// half turn since stroke orientation is undirected. Uses the default
/// tensor sigmas from [`crate::io::configuration`].
///
/// # Errors
///
/// Returns an error if the tensor computation fails.
pub fn compute_angles(im: &Array3<f64>) -> Result<Array2<f64>> {
    let tensor = compute_tensor(
        im,
        crate::io::configuration::TENSOR_SIGMA,
        crate::io::configuration::TENSOR_SIGMA_FACTOR,
    )?;

    let (height, width, _) = tensor.dim();
    let mut angles = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            angles[[y, x]] = smallest_eigenvector_angle(
                tensor[[y, x, 0]],
                tensor[[y, x, 1]],
                tensor[[y, x, 2]],
            );
        }
    }
    Ok(angles)
}

// Angle of the eigenvector for the smaller eigenvalue of [[a, b], [b, c]],
// folded into [0, PI)
fn smallest_eigenvector_angle(a: f64, b: f64, c: f64) -> f64 {
    if b.abs() < OFF_DIAGONAL_EPSILON {
        // Diagonal matrix: eigenvectors are the axes
        return if a <= c { 0.0 } else { PI / 2.0 };
    }

    let mean = (a + c) / 2.0;
    let half_diff = (a - c) / 2.0;
    let radius = half_diff.hypot(b);
    let lambda_min = mean - radius;

    // (b, lambda - a) is an eigenvector for lambda when b is nonzero
    (lambda_min - a).atan2(b).rem_euclid(PI)
}
