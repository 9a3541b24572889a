//! Brush texture loading, procedural generation, and rescaling

use crate::io::configuration::{PROCEDURAL_BRUSH_HEIGHT, PROCEDURAL_BRUSH_WIDTH};
use crate::io::error::{PaintError, Result, invalid_parameter};
use crate::math::filter::luminance;
use ndarray::{Array2, Array3};
use std::path::Path;

/// A single-channel opacity patch in `[0, 1]`
///
/// Zero opacity leaves the canvas untouched, one replaces it with the stroke
/// color, and intermediate values blend linearly. The patch is read-only
/// once built and is shared across every stroke placement of a pass.
#[derive(Debug, Clone)]
pub struct BrushTexture {
    opacity: Array2<f64>,
}

impl BrushTexture {
    /// Build a brush from a raw opacity patch, clamping values into `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns an error if the patch has a zero dimension or contains
    /// non-finite values.
    pub fn from_opacity(mut opacity: Array2<f64>) -> Result<Self> {
        let (height, width) = opacity.dim();
        if height == 0 || width == 0 {
            return Err(invalid_parameter(
                "texture",
                &format!("{height}x{width}"),
                &"texture must have positive dimensions",
            ));
        }
        for value in &mut opacity {
            if !value.is_finite() {
                return Err(invalid_parameter(
                    "texture",
                    value,
                    &"opacity values must be finite",
                ));
            }
            *value = value.clamp(0.0, 1.0);
        }
        Ok(Self { opacity })
    }

    /// Load a brush from a greyscale image file, luminance as opacity
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or yields an empty
    /// patch.
    pub fn from_image_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| PaintError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        let rgb = img.to_rgb8();

        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let mut data = Array3::zeros((height, width, 3));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            for (c, &value) in pixel.0.iter().enumerate() {
                data[[y as usize, x as usize, c]] = f64::from(value) / 255.0;
            }
        }

        Self::from_opacity(luminance(&data))
    }

    /// The built-in procedural brush: a soft ellipse, wider than tall
    ///
    /// The elongation makes stroke orientation legible without any asset
    /// file on disk.
    pub fn default_stroke() -> Self {
        let (height, width) = (PROCEDURAL_BRUSH_HEIGHT, PROCEDURAL_BRUSH_WIDTH);
        let cy = (height as f64 - 1.0) / 2.0;
        let cx = (width as f64 - 1.0) / 2.0;

        let mut opacity = Array2::zeros((height, width));
        for y in 0..height {
            for x in 0..width {
                let dy = (y as f64 - cy) / cy.max(1.0);
                let dx = (x as f64 - cx) / cx.max(1.0);
                let radial = dx.mul_add(dx, dy * dy);
                opacity[[y, x]] = (1.0 - radial).clamp(0.0, 1.0);
            }
        }
        Self { opacity }
    }

    /// The opacity patch
    pub const fn opacity(&self) -> &Array2<f64> {
        &self.opacity
    }

    /// Patch height in pixels
    pub fn height(&self) -> usize {
        self.opacity.nrows()
    }

    /// Patch width in pixels
    pub fn width(&self) -> usize {
        self.opacity.ncols()
    }

    /// Rescale so the longest side equals `size`, preserving aspect ratio
    ///
    /// Upscaling and downscaling both use bilinear resampling; the result
    /// always keeps at least one pixel per axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn scaled_to(&self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"stroke size must be at least 1",
            ));
        }

        let (height, width) = self.opacity.dim();
        let factor = size as f64 / height.max(width) as f64;
        let new_height = ((height as f64 * factor).round() as usize).max(1);
        let new_width = ((width as f64 * factor).round() as usize).max(1);

        let mut scaled = Array2::zeros((new_height, new_width));
        for y in 0..new_height {
            for x in 0..new_width {
                let sy = axis_source(y, new_height, height);
                let sx = axis_source(x, new_width, width);
                scaled[[y, x]] = bilinear(&self.opacity, sy, sx);
            }
        }
        Ok(Self { opacity: scaled })
    }
}

// Map an output index onto fractional source coordinates for resampling
fn axis_source(index: usize, out_len: usize, in_len: usize) -> f64 {
    if out_len <= 1 {
        return (in_len as f64 - 1.0) / 2.0;
    }
    index as f64 * (in_len as f64 - 1.0) / (out_len as f64 - 1.0)
}

/// Bilinear sample with clamped corner taps
pub(crate) fn bilinear(map: &Array2<f64>, y: f64, x: f64) -> f64 {
    let (height, width) = map.dim();
    let y0 = (y.floor().max(0.0) as usize).min(height - 1);
    let x0 = (x.floor().max(0.0) as usize).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let x1 = (x0 + 1).min(width - 1);

    let fy = (y - y0 as f64).clamp(0.0, 1.0);
    let fx = (x - x0 as f64).clamp(0.0, 1.0);

    let top = (map[[y0, x1]] - map[[y0, x0]]).mul_add(fx, map[[y0, x0]]);
    let bottom = (map[[y1, x1]] - map[[y1, x0]]).mul_add(fx, map[[y1, x0]]);
    (bottom - top).mul_add(fy, top)
}
