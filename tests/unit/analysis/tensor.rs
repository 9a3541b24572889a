//! Tests for structure tensor orientation extraction

#[cfg(test)]
mod tests {
    use crate::analysis::tensor::{compute_angles, compute_tensor};
    use crate::io::error::PaintError;
    use ndarray::Array3;
    use std::f64::consts::PI;

    fn horizontal_edge_image() -> Array3<f64> {
        // Top half dark, bottom half bright: gradient points down, the
        // edge itself runs horizontally
        let mut im = Array3::zeros((32, 32, 3));
        for y in 16..32 {
            for x in 0..32 {
                for c in 0..3 {
                    im[[y, x, c]] = 1.0;
                }
            }
        }
        im
    }

    #[test]
    fn test_angles_lie_in_the_half_turn() {
        let Ok(thetas) = compute_angles(&horizontal_edge_image()) else {
            unreachable!("angle computation must succeed");
        };
        for &theta in &thetas {
            assert!((0.0..PI).contains(&theta));
        }
    }

    #[test]
    fn test_horizontal_edge_gives_horizontal_orientation() {
        let Ok(thetas) = compute_angles(&horizontal_edge_image()) else {
            unreachable!("angle computation must succeed");
        };

        for x in 12..20 {
            for y in 14..18 {
                let theta = thetas[[y, x]];
                let distance = theta.min(PI - theta);
                assert!(
                    distance < 0.2,
                    "expected near-horizontal angle at ({y}, {x}), got {theta}"
                );
            }
        }
    }

    #[test]
    fn test_tensor_has_three_components_per_pixel() {
        let Ok(tensor) = compute_tensor(&horizontal_edge_image(), 3.0, 5.0) else {
            unreachable!("tensor computation must succeed");
        };
        assert_eq!(tensor.dim(), (32, 32, 3));

        // Off-diagonal vanishes for an axis-aligned edge
        assert!(tensor[[16, 16, 1]].abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_sigma_is_rejected() {
        let im = Array3::zeros((8, 8, 3));
        assert!(matches!(
            compute_tensor(&im, -1.0, 5.0),
            Err(PaintError::InvalidParameter { .. })
        ));
        assert!(matches!(
            compute_tensor(&im, 3.0, 0.0),
            Err(PaintError::InvalidParameter { .. })
        ));
    }
}
