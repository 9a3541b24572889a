//! Image decoding into float arrays and PNG export
//!
//! Sources and canvases travel through the painter as `(height, width,
//! channel)` arrays of `f64` in `[0, 1]`, RGB channel order.

use crate::io::error::{PaintError, Result};
use image::{Rgb, RgbImage};
use ndarray::Array3;
use std::path::Path;

/// Decode an image file into an RGB float array in `[0, 1]`
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a valid image
/// format, or decodes to a zero-sized image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Array3<f64>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PaintError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    let rgb = img.to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    if width == 0 || height == 0 {
        return Err(crate::io::error::invalid_parameter(
            "image",
            &format!("{height}x{width}"),
            &"source image must have positive dimensions",
        ));
    }

    let mut data = Array3::zeros((height, width, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for (c, &value) in pixel.0.iter().enumerate() {
            data[[y as usize, x as usize, c]] = f64::from(value) / 255.0;
        }
    }
    Ok(data)
}

/// Encode a canvas to a PNG file, creating parent directories as needed
///
/// Values are clamped into `[0, 1]` before quantization; canvases with
/// fewer than three channels replicate their last channel.
///
/// # Errors
///
/// Returns an error if:
/// - the parent directory cannot be created
/// - the canvas is zero-sized
/// - the image cannot be encoded or written
pub fn save_image<P: AsRef<Path>>(canvas: &Array3<f64>, path: P) -> Result<()> {
    let (height, width, channels) = canvas.dim();
    if height == 0 || width == 0 || channels == 0 {
        return Err(crate::io::error::invalid_parameter(
            "canvas",
            &format!("{height}x{width}x{channels}"),
            &"canvas must have positive dimensions",
        ));
    }

    let mut img = RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let mut rgb = [0u8; 3];
            for (c, slot) in rgb.iter_mut().enumerate() {
                let value = canvas[[y, x, c.min(channels - 1)]].clamp(0.0, 1.0);
                *slot = (value * 255.0).round() as u8;
            }
            img.put_pixel(x as u32, y as u32, Rgb(rgb));
        }
    }

    let path_ref = path.as_ref();
    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PaintError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path_ref).map_err(|e| PaintError::ImageExport {
        path: path_ref.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
