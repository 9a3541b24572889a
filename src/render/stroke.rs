//! Alpha-composited stroke splatting

use crate::brush::BrushTexture;
use ndarray::Array3;

/// Composite one brush stroke onto the canvas, centered at `(y, x)`
///
/// Each texture pixel blends `color` over the existing canvas content by
/// its opacity: zero leaves the canvas untouched, one replaces it. Strokes
/// overlapping the canvas border are clipped to the canvas; pixels outside
/// `[0, height) × [0, width)` are never written.
pub fn splat(out: &mut Array3<f64>, y: usize, x: usize, color: &[f64; 3], texture: &BrushTexture) {
    let (height, width, channels) = out.dim();
    let opacity = texture.opacity();
    let (tex_height, tex_width) = opacity.dim();

    let top = y as i64 - (tex_height / 2) as i64;
    let left = x as i64 - (tex_width / 2) as i64;

    for ty in 0..tex_height {
        let oy = top + ty as i64;
        if oy < 0 || oy >= height as i64 {
            continue;
        }
        for tx in 0..tex_width {
            let ox = left + tx as i64;
            if ox < 0 || ox >= width as i64 {
                continue;
            }

            let alpha = opacity[[ty, tx]];
            if alpha <= 0.0 {
                continue;
            }

            for (c, &value) in color.iter().enumerate().take(channels) {
                let old = out[[oy as usize, ox as usize, c]];
                out[[oy as usize, ox as usize, c]] = alpha.mul_add(value - old, old);
            }
        }
    }
}
