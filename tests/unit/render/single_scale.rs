//! Tests for single-scale importance-sampled painting

#[cfg(test)]
mod tests {
    use crate::brush::BrushTexture;
    use crate::io::error::PaintError;
    use crate::render::single_scale::{modulated_color, paint, paint_oriented};
    use ndarray::{Array2, Array3};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gray_image(side: usize) -> Array3<f64> {
        Array3::from_elem((side, side, 3), 0.5)
    }

    fn unit_texture() -> BrushTexture {
        let Ok(texture) = BrushTexture::from_opacity(Array2::ones((1, 1))) else {
            unreachable!("finite patch must build a texture");
        };
        texture
    }

    #[test]
    fn test_noise_free_color_is_exact() {
        let im = gray_image(4);
        let mut rng = StdRng::seed_from_u64(1);
        let color = modulated_color(&im, 2, 2, 0.0, &mut rng);
        for channel in color {
            assert!((channel - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_noisy_color_stays_in_range() {
        let im = Array3::from_elem((4, 4, 3), 0.9);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            for channel in modulated_color(&im, 1, 1, 1.0, &mut rng) {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_zero_strokes_leaves_canvas_blank() {
        let im = gray_image(8);
        let mut out = Array3::zeros((8, 8, 3));
        let importance = Array2::ones((8, 8));
        let mut rng = StdRng::seed_from_u64(3);

        let Ok(()) = paint(
            &im,
            &mut out,
            &importance,
            &unit_texture(),
            1,
            0,
            0.0,
            &mut rng,
        ) else {
            unreachable!("valid pass must paint");
        };
        assert!(out.sum().abs() < f64::EPSILON);
    }

    #[test]
    fn test_importance_shape_mismatch_is_rejected() {
        let im = gray_image(8);
        let mut out = Array3::zeros((8, 8, 3));
        let importance = Array2::ones((8, 7));
        let mut rng = StdRng::seed_from_u64(4);

        let result = paint(
            &im,
            &mut out,
            &importance,
            &unit_texture(),
            1,
            10,
            0.0,
            &mut rng,
        );
        assert!(matches!(result, Err(PaintError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_orientation_map_shape_mismatch_is_rejected() {
        let im = gray_image(8);
        let mut out = Array3::zeros((8, 8, 3));
        let importance = Array2::ones((8, 8));
        let thetas = Array2::zeros((7, 8));
        let mut rng = StdRng::seed_from_u64(5);

        let result = paint_oriented(
            &im,
            &mut out,
            &thetas,
            &importance,
            &unit_texture(),
            1,
            10,
            0.0,
            4,
            &mut rng,
        );
        assert!(matches!(result, Err(PaintError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_out_of_range_noise_is_rejected() {
        let im = gray_image(8);
        let mut out = Array3::zeros((8, 8, 3));
        let importance = Array2::ones((8, 8));
        let mut rng = StdRng::seed_from_u64(6);

        let result = paint(
            &im,
            &mut out,
            &importance,
            &unit_texture(),
            1,
            10,
            1.5,
            &mut rng,
        );
        assert!(matches!(result, Err(PaintError::InvalidParameter { .. })));
    }
}
