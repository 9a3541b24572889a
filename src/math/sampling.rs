//! Importance-weighted location sampling via CDF inversion
//!
//! A prefix sum over the flattened importance map is built once per painting
//! pass; each draw is then a uniform variate and a binary search, so placing
//! N strokes costs O(P + N log P) for a P-pixel map instead of a per-pixel
//! rejection loop with unbounded retries.

use crate::io::error::{PaintError, Result, invalid_parameter};
use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// Draws pixel locations with probability proportional to a weight map
#[derive(Debug, Clone)]
pub struct ImportanceSampler {
    cumulative: Vec<f64>,
    width: usize,
    total: f64,
}

impl ImportanceSampler {
    /// Build a sampler from a non-negative importance map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any weight is negative or non-finite (`InvalidParameter`)
    /// - the weights sum to zero, leaving the location distribution
    ///   undefined (`DegenerateImportance`)
    pub fn from_map(importance: &Array2<f64>) -> Result<Self> {
        let width = importance.ncols();

        let mut cumulative = Vec::with_capacity(importance.len());
        let mut running = 0.0;
        for &weight in importance {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_parameter(
                    "importance",
                    &weight,
                    &"weights must be finite and non-negative",
                ));
            }
            running += weight;
            cumulative.push(running);
        }

        if running <= 0.0 {
            return Err(PaintError::DegenerateImportance { total: running });
        }

        Ok(Self {
            cumulative,
            width,
            total: running,
        })
    }

    /// Sum of all weights in the map
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Draw a `(y, x)` location distributed according to the weight map
    pub fn draw(&self, rng: &mut StdRng) -> (usize, usize) {
        let target = rng.random::<f64>() * self.total;
        let index = self
            .cumulative
            .partition_point(|&c| c <= target)
            .min(self.cumulative.len().saturating_sub(1));
        (index / self.width, index % self.width)
    }
}
