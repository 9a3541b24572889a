//! Tests for image decoding and PNG export

#[cfg(test)]
mod tests {
    use crate::io::error::PaintError;
    use crate::io::image::{load_image, save_image};
    use ndarray::Array3;

    #[test]
    fn test_round_trip_preserves_quantized_values() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let path = dir.path().join("roundtrip.png");

        let mut canvas = Array3::zeros((4, 6, 3));
        for y in 0..4 {
            for x in 0..6 {
                canvas[[y, x, 0]] = y as f64 / 3.0;
                canvas[[y, x, 1]] = x as f64 / 5.0;
                canvas[[y, x, 2]] = 1.0;
            }
        }

        let Ok(()) = save_image(&canvas, &path) else {
            unreachable!("export to a temp path must succeed");
        };
        let Ok(reloaded) = load_image(&path) else {
            unreachable!("reload of the exported file must succeed");
        };

        assert_eq!(reloaded.dim(), canvas.dim());
        for (a, b) in canvas.iter().zip(reloaded.iter()) {
            // One quantization step of headroom
            assert!((a - b).abs() < 1.0 / 254.0);
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped_on_save() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let path = dir.path().join("clamped.png");

        let mut canvas = Array3::zeros((2, 2, 3));
        canvas[[0, 0, 0]] = 7.0;
        canvas[[1, 1, 2]] = -3.0;

        let Ok(()) = save_image(&canvas, &path) else {
            unreachable!("export to a temp path must succeed");
        };
        let Ok(reloaded) = load_image(&path) else {
            unreachable!("reload of the exported file must succeed");
        };

        assert!((reloaded[[0, 0, 0]] - 1.0).abs() < f64::EPSILON);
        assert!(reloaded[[1, 1, 2]].abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_reports_image_load() {
        let result = load_image("definitely/not/here.png");
        assert!(matches!(result, Err(PaintError::ImageLoad { .. })));
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let canvas = Array3::zeros((0, 4, 3));
        let result = save_image(&canvas, "unused.png");
        assert!(matches!(result, Err(PaintError::InvalidParameter { .. })));
    }
}
