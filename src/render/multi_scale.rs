//! Coarse-to-fine painting orchestration
//!
//! Every painting mode shares the same shape: block in the whole canvas
//! with large uniformly-placed strokes, then add smaller strokes where the
//! sharpness map says the source has fine structure. A flat source produces
//! an all-zero sharpness map; the detail pass is skipped in that case since
//! there is no detail to chase.

use crate::analysis::sharpness::{sharpness_map, uniform_importance};
use crate::analysis::tensor::compute_angles;
use crate::brush::{BrushTexture, RotationBank};
use crate::io::configuration::{DETAIL_SIZE_DIVISOR, GAUSSIAN_TRUNCATE, SHARPNESS_SIGMA};
use crate::io::error::Result;
use crate::math::filter::color_luminance;
use crate::math::sampling::ImportanceSampler;
use crate::render::single_scale::{
    modulated_color, paint, paint_oriented, validate_oriented_pass,
};
use crate::render::stroke::splat;
use ndarray::{Array2, Array3};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Sharpness schedule for the extra scales of multi_scale_oriented_paint;
// tightening sigma shifts weight toward ever finer structure
const SCALE_SIGMA_START: f64 = 2.0;
const SCALE_SIGMA_STEP: f64 = 0.2;
const SCALE_TRUNCATE_START: f64 = 6.0;
const SCALE_TRUNCATE_STEP: f64 = 0.5;

/// Ordering for tonal painting modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonalOrder {
    /// Paint the brightest strokes first, darker strokes over them
    LightToDark,
    /// Paint the darkest strokes first, brighter strokes over them
    DarkToLight,
}

/// Two-pass painterly rendering of a source image
///
/// Pass one covers the canvas with uniformly-placed strokes of the base
/// `size`; pass two adds strokes a quarter of that size where the
/// sharpness map is high. Returns the accumulated canvas.
///
/// # Errors
///
/// Returns an error if pass validation, sharpness analysis, or texture
/// scaling fails.
pub fn painterly(
    im: &Array3<f64>,
    texture: &BrushTexture,
    strokes: usize,
    size: usize,
    noise: f64,
    seed: u64,
) -> Result<Array3<f64>> {
    let (height, width, _) = im.dim();
    let mut out = Array3::zeros(im.dim());
    let mut rng = StdRng::seed_from_u64(seed);

    let uniform = uniform_importance(height, width);
    paint(im, &mut out, &uniform, texture, size, strokes, noise, &mut rng)?;

    let sharpness = sharpness_map(im, SHARPNESS_SIGMA, GAUSSIAN_TRUNCATE)?;
    if sharpness.sum() > 0.0 {
        let detail_size = (size / DETAIL_SIZE_DIVISOR).max(1);
        paint(
            im, &mut out, &sharpness, texture, detail_size, strokes, noise, &mut rng,
        )?;
    }
    Ok(out)
}

/// Two-pass painterly rendering with structure-oriented strokes
///
/// Like [`painterly`], but the orientation map is computed once and both
/// passes rotate each stroke to the local edge direction.
///
/// # Errors
///
/// Returns an error if pass validation, orientation analysis, or texture
/// preparation fails.
pub fn oriented_paint(
    im: &Array3<f64>,
    texture: &BrushTexture,
    strokes: usize,
    size: usize,
    noise: f64,
    n_angles: usize,
    seed: u64,
) -> Result<Array3<f64>> {
    let (height, width, _) = im.dim();
    let mut out = Array3::zeros(im.dim());
    let mut rng = StdRng::seed_from_u64(seed);

    let thetas = compute_angles(im)?;
    let uniform = uniform_importance(height, width);
    paint_oriented(
        im, &mut out, &thetas, &uniform, texture, size, strokes, noise, n_angles, &mut rng,
    )?;

    let sharpness = sharpness_map(im, SHARPNESS_SIGMA, GAUSSIAN_TRUNCATE)?;
    if sharpness.sum() > 0.0 {
        let detail_size = (size / DETAIL_SIZE_DIVISOR).max(1);
        paint_oriented(
            im, &mut out, &thetas, &sharpness, texture, detail_size, strokes, noise, n_angles,
            &mut rng,
        )?;
    }
    Ok(out)
}

/// Oriented painting with strokes ordered by luminance
///
/// Strokes are sampled exactly as in [`oriented_paint`] but splatted in
/// tonal order within each pass, imitating a painter who lays in lights
/// (or darks) before working the opposite end of the value range.
///
/// # Errors
///
/// Returns an error if pass validation, orientation analysis, or texture
/// preparation fails.
pub fn tonal_paint(
    im: &Array3<f64>,
    texture: &BrushTexture,
    strokes: usize,
    size: usize,
    noise: f64,
    n_angles: usize,
    order: TonalOrder,
    seed: u64,
) -> Result<Array3<f64>> {
    let (height, width, _) = im.dim();
    let mut out = Array3::zeros(im.dim());
    let mut rng = StdRng::seed_from_u64(seed);

    let thetas = compute_angles(im)?;
    let uniform = uniform_importance(height, width);
    tonal_pass(
        im, &mut out, &thetas, &uniform, texture, size, strokes, noise, n_angles, order, &mut rng,
    )?;

    let sharpness = sharpness_map(im, SHARPNESS_SIGMA, GAUSSIAN_TRUNCATE)?;
    if sharpness.sum() > 0.0 {
        let detail_size = (size / DETAIL_SIZE_DIVISOR).max(1);
        tonal_pass(
            im, &mut out, &thetas, &sharpness, texture, detail_size, strokes, noise, n_angles,
            order, &mut rng,
        )?;
    }
    Ok(out)
}

/// Oriented painting over a coarse pass plus several sharpening scales
///
/// After the uniform coarse pass, each extra scale recomputes the
/// sharpness map with a tighter sigma and paints progressively smaller
/// strokes, so the finest strokes land only on the crispest structure.
///
/// # Errors
///
/// Returns an error if pass validation, analysis, or texture preparation
/// fails.
pub fn multi_scale_oriented_paint(
    im: &Array3<f64>,
    texture: &BrushTexture,
    strokes: usize,
    size: usize,
    noise: f64,
    n_angles: usize,
    num_scales: usize,
    seed: u64,
) -> Result<Array3<f64>> {
    let (height, width, _) = im.dim();
    let mut out = Array3::zeros(im.dim());
    let mut rng = StdRng::seed_from_u64(seed);

    let thetas = compute_angles(im)?;
    let uniform = uniform_importance(height, width);
    paint_oriented(
        im, &mut out, &thetas, &uniform, texture, size, strokes, noise, n_angles, &mut rng,
    )?;

    for scale in 1..=num_scales {
        let sigma = SCALE_SIGMA_STEP
            .mul_add(-((scale - 1) as f64), SCALE_SIGMA_START)
            .max(SCALE_SIGMA_STEP);
        let truncate = SCALE_TRUNCATE_STEP
            .mul_add(-((scale - 1) as f64), SCALE_TRUNCATE_START)
            .max(1.0);

        let sharpness = sharpness_map(im, sigma, truncate)?;
        if sharpness.sum() <= 0.0 {
            continue;
        }

        let scale_size = (size / (scale * 2)).max(1);
        paint_oriented(
            im, &mut out, &thetas, &sharpness, texture, scale_size, strokes, noise, n_angles,
            &mut rng,
        )?;
    }
    Ok(out)
}

// One tonal pass: sample every stroke up front, sort by luminance, then
// splat in order. Sampling order stays identical to paint_oriented so the
// same seed visits the same locations.
fn tonal_pass(
    im: &Array3<f64>,
    out: &mut Array3<f64>,
    thetas: &Array2<f64>,
    importance: &Array2<f64>,
    texture: &BrushTexture,
    size: usize,
    strokes: usize,
    noise: f64,
    n_angles: usize,
    order: TonalOrder,
    rng: &mut StdRng,
) -> Result<()> {
    validate_oriented_pass(im, out, thetas, importance, size, noise)?;

    let scaled = texture.scaled_to(size)?;
    let bank = RotationBank::new(&scaled, n_angles)?;
    let sampler = ImportanceSampler::from_map(importance)?;

    let mut events: Vec<(f64, usize, usize, [f64; 3])> = Vec::with_capacity(strokes);
    for _ in 0..strokes {
        let (y, x) = sampler.draw(rng);
        let color = modulated_color(im, y, x, noise, rng);
        events.push((color_luminance(&color), y, x, color));
    }

    events.sort_by(|a, b| a.0.total_cmp(&b.0));
    if order == TonalOrder::LightToDark {
        events.reverse();
    }

    for (_, y, x, color) in &events {
        splat(out, *y, *x, color, bank.nearest(thetas[[*y, *x]]));
    }
    Ok(())
}
