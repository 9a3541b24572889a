//! Tests for brush texture construction and rescaling

#[cfg(test)]
mod tests {
    use crate::brush::BrushTexture;
    use crate::io::error::PaintError;
    use ndarray::Array2;

    #[test]
    fn test_opacity_values_are_clamped() {
        let mut raw = Array2::zeros((2, 2));
        raw[[0, 0]] = 1.8;
        raw[[1, 1]] = -0.4;

        let Ok(texture) = BrushTexture::from_opacity(raw) else {
            unreachable!("finite patch must build a texture");
        };
        assert!((texture.opacity()[[0, 0]] - 1.0).abs() < f64::EPSILON);
        assert!(texture.opacity()[[1, 1]].abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let result = BrushTexture::from_opacity(Array2::zeros((0, 3)));
        assert!(matches!(result, Err(PaintError::InvalidParameter { .. })));
    }

    #[test]
    fn test_default_stroke_is_elongated_and_centered() {
        let brush = BrushTexture::default_stroke();
        assert!(brush.width() > brush.height());

        let center = brush.opacity()[[brush.height() / 2, brush.width() / 2]];
        let corner = brush.opacity()[[0, 0]];
        assert!(center > 0.9);
        assert!(corner.abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaling_preserves_aspect_ratio() {
        let Ok(texture) = BrushTexture::from_opacity(Array2::ones((10, 20))) else {
            unreachable!("finite patch must build a texture");
        };
        let Ok(scaled) = texture.scaled_to(10) else {
            unreachable!("positive size must scale");
        };
        assert_eq!((scaled.height(), scaled.width()), (5, 10));
    }

    #[test]
    fn test_scaling_never_collapses_an_axis() {
        let Ok(texture) = BrushTexture::from_opacity(Array2::ones((2, 40))) else {
            unreachable!("finite patch must build a texture");
        };
        let Ok(scaled) = texture.scaled_to(4) else {
            unreachable!("positive size must scale");
        };
        assert!(scaled.height() >= 1);
        assert_eq!(scaled.width(), 4);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let Ok(texture) = BrushTexture::from_opacity(Array2::ones((4, 4))) else {
            unreachable!("finite patch must build a texture");
        };
        assert!(matches!(
            texture.scaled_to(0),
            Err(PaintError::InvalidParameter { .. })
        ));
    }
}
