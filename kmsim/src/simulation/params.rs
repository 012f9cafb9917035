//! Validated problem parameters for a clustering run
//!
//! `Parameters` is the runtime counterpart of
//! [`ParametersConfig`]: sizes are checked and narrowed to the types the
//! engine indexes with, so nothing downstream has to re-validate.
//!
//! The window is capped at 2^31: the largest squared distance,
//! `2 * (w - 1)^2`, then still fits in an `i64`.

use crate::configuration::config::ParametersConfig;
use crate::simulation::error::{KmsimError, Result};

/// Largest accepted `window_dimension`
pub const MAX_WINDOW_DIMENSION: i64 = 1 << 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub window_dimension: u32, // coordinates are drawn from [0, window_dimension)
    pub points_number: usize, // number of points
    pub clusters_number: usize, // number of clusters
    pub seed: u64, // deterministic seed
}

impl Parameters {
    pub fn new(window_dimension: i64, points_number: i64, clusters_number: i64, seed: u64) -> Result<Self> {
        if window_dimension <= 0 || window_dimension > MAX_WINDOW_DIMENSION {
            return Err(KmsimError::InvalidConfiguration {
                field: "window_dimension",
                value: window_dimension,
                reason: "must be in 1..=2147483648",
            });
        }
        if points_number <= 0 {
            return Err(KmsimError::InvalidConfiguration {
                field: "points_number",
                value: points_number,
                reason: "must be positive",
            });
        }
        if clusters_number <= 0 {
            return Err(KmsimError::InvalidConfiguration {
                field: "clusters_number",
                value: clusters_number,
                reason: "must be positive",
            });
        }

        Ok(Self {
            window_dimension: window_dimension as u32,
            points_number: points_number as usize,
            clusters_number: clusters_number as usize,
            seed,
        })
    }
}

impl TryFrom<&ParametersConfig> for Parameters {
    type Error = KmsimError;

    fn try_from(cfg: &ParametersConfig) -> Result<Self> {
        Parameters::new(cfg.window_dimension, cfg.points_number, cfg.clusters_number, cfg.seed)
    }
}
