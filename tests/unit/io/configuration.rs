//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        DEFAULT_ANGLE_BINS, DEFAULT_NOISE, DEFAULT_STROKE_SIZE, DETAIL_SIZE_DIVISOR,
        PROCEDURAL_BRUSH_HEIGHT, PROCEDURAL_BRUSH_WIDTH, SHARPNESS_SIGMA, TENSOR_SIGMA,
    };

    #[test]
    fn test_detail_pass_still_paints_at_default_size() {
        assert!(DEFAULT_STROKE_SIZE / DETAIL_SIZE_DIVISOR >= 1);
    }

    #[test]
    fn test_noise_default_is_a_valid_fraction() {
        assert!((0.0..=1.0).contains(&DEFAULT_NOISE));
    }

    #[test]
    fn test_procedural_brush_is_elongated() {
        assert!(PROCEDURAL_BRUSH_WIDTH > PROCEDURAL_BRUSH_HEIGHT);
    }

    #[test]
    fn test_sigmas_are_positive() {
        assert!(SHARPNESS_SIGMA > 0.0);
        assert!(TENSOR_SIGMA > 0.0);
        assert!(DEFAULT_ANGLE_BINS > 0);
    }
}
