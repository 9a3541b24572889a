//! One pass of importance-sampled stroke placement
//!
//! A pass makes exactly `strokes` placements. Locations come from the
//! importance sampler, colors from the source image with a multiplicative
//! noise perturbation, and every placement mutates the canvas in place.
//! Edge-clipped strokes still count as placements.

use crate::brush::{BrushTexture, RotationBank};
use crate::io::error::{Result, invalid_parameter, shape_mismatch};
use crate::math::sampling::ImportanceSampler;
use crate::render::stroke::splat;
use ndarray::{Array2, Array3};
use rand::Rng;
use rand::rngs::StdRng;

/// Paint `strokes` importance-sampled strokes at one scale
///
/// The texture is rescaled once so its longest side is `size`, then each
/// stroke samples a location from `importance`, reads the source color
/// there, perturbs it, and splats.
///
/// # Errors
///
/// Returns an error if:
/// - canvas or importance dimensions disagree with the source
/// - `size` is zero or `noise` lies outside `[0, 1]`
/// - the importance map carries no positive weight
pub fn paint(
    im: &Array3<f64>,
    out: &mut Array3<f64>,
    importance: &Array2<f64>,
    texture: &BrushTexture,
    size: usize,
    strokes: usize,
    noise: f64,
    rng: &mut StdRng,
) -> Result<()> {
    validate_pass(im, out, importance, size, noise)?;

    let scaled = texture.scaled_to(size)?;
    let sampler = ImportanceSampler::from_map(importance)?;

    for _ in 0..strokes {
        let (y, x) = sampler.draw(rng);
        let color = modulated_color(im, y, x, noise, rng);
        splat(out, y, x, &color, &scaled);
    }
    Ok(())
}

/// Paint `strokes` strokes oriented by the local angle field
///
/// Identical to [`paint`] except that each stroke rotates the texture to
/// the angle recorded in `thetas` at its location, discretized to one of
/// `n_angles` precomputed rotations.
///
/// # Errors
///
/// Returns an error if:
/// - canvas, importance, or angle dimensions disagree with the source
/// - `size` is zero, `noise` lies outside `[0, 1]`, or `n_angles` is zero
/// - the importance map carries no positive weight
pub fn paint_oriented(
    im: &Array3<f64>,
    out: &mut Array3<f64>,
    thetas: &Array2<f64>,
    importance: &Array2<f64>,
    texture: &BrushTexture,
    size: usize,
    strokes: usize,
    noise: f64,
    n_angles: usize,
    rng: &mut StdRng,
) -> Result<()> {
    validate_oriented_pass(im, out, thetas, importance, size, noise)?;

    let scaled = texture.scaled_to(size)?;
    let bank = RotationBank::new(&scaled, n_angles)?;
    let sampler = ImportanceSampler::from_map(importance)?;

    for _ in 0..strokes {
        let (y, x) = sampler.draw(rng);
        let color = modulated_color(im, y, x, noise, rng);
        splat(out, y, x, &color, bank.nearest(thetas[[y, x]]));
    }
    Ok(())
}

/// Source color at `(y, x)` with multiplicative noise applied per channel
///
/// Each channel is scaled by `1 - noise/2 + noise·u` with `u ~ U[0, 1)`,
/// then clamped back into `[0, 1]`. Missing channels replicate the last
/// available one so greyscale sources paint in grey.
pub fn modulated_color(
    im: &Array3<f64>,
    y: usize,
    x: usize,
    noise: f64,
    rng: &mut StdRng,
) -> [f64; 3] {
    let channels = im.dim().2;
    let mut color = [0.0; 3];
    for (c, slot) in color.iter_mut().enumerate() {
        let base = im[[y, x, c.min(channels.saturating_sub(1))]];
        let modulation = noise.mul_add(rng.random::<f64>(), 1.0 - noise / 2.0);
        *slot = (base * modulation).clamp(0.0, 1.0);
    }
    color
}

// Oriented passes additionally require the angle field to cover the source
pub(crate) fn validate_oriented_pass(
    im: &Array3<f64>,
    out: &Array3<f64>,
    thetas: &Array2<f64>,
    importance: &Array2<f64>,
    size: usize,
    noise: f64,
) -> Result<()> {
    validate_pass(im, out, importance, size, noise)?;

    let (height, width, _) = im.dim();
    if thetas.dim() != (height, width) {
        return Err(shape_mismatch(
            "orientation map vs source",
            (height, width),
            thetas.dim(),
        ));
    }
    Ok(())
}

// Shared validation for painting passes: spatial agreement and parameter
// ranges, checked before any stroke is placed
fn validate_pass(
    im: &Array3<f64>,
    out: &Array3<f64>,
    importance: &Array2<f64>,
    size: usize,
    noise: f64,
) -> Result<()> {
    let (height, width, _) = im.dim();
    let (out_height, out_width, _) = out.dim();

    if (out_height, out_width) != (height, width) {
        return Err(shape_mismatch(
            "canvas vs source",
            (height, width),
            (out_height, out_width),
        ));
    }
    if importance.dim() != (height, width) {
        return Err(shape_mismatch(
            "importance map vs source",
            (height, width),
            importance.dim(),
        ));
    }
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"stroke size must be at least 1",
        ));
    }
    if !(0.0..=1.0).contains(&noise) {
        return Err(invalid_parameter(
            "noise",
            &noise,
            &"noise fraction must lie in [0, 1]",
        ));
    }
    Ok(())
}
