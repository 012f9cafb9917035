//! Configuration types for loading clustering scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! clustering run. A scenario consists of:
//!
//! - [`EngineConfig`]     – run options (iteration cap, worker threads)
//! - [`ParametersConfig`] – problem size and the deterministic seed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every field is optional, missing ones fall back to the defaults below:
//!
//! ```yaml
//! engine:
//!   max_iterations: 500     # cap on the number of steps
//!   threads: 4              # rayon workers, omit for one per core
//!
//! parameters:
//!   window_dimension: 600   # coordinates are drawn from [0, 600)
//!   points_number: 70000
//!   clusters_number: 10
//!   seed: 42
//! ```
//!
//! Values are kept signed here so that a negative size coming from a file or
//! the command line is reported as an invalid configuration instead of a
//! parse failure. Validation happens when the runtime
//! [`Parameters`](crate::simulation::params::Parameters) are built.

use serde::Deserialize;

pub const DEFAULT_WINDOW_DIMENSION: i64 = 600;
pub const DEFAULT_POINTS_NUMBER: i64 = 70_000;
pub const DEFAULT_CLUSTERS_NUMBER: i64 = 10;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MAX_ITERATIONS: u64 = 500;

/// Run-level engine configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub max_iterations: u64,     // iteration cap, the run stops here even if not converged
    pub threads: Option<usize>,  // worker threads for the parallel step, `None` = rayon default
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threads: None,
        }
    }
}

/// Problem parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub window_dimension: i64, // side of the square coordinate space
    pub points_number: i64,    // number of points to cluster
    pub clusters_number: i64,  // number of clusters (k)
    pub seed: u64,             // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            window_dimension: DEFAULT_WINDOW_DIMENSION,
            points_number: DEFAULT_POINTS_NUMBER,
            clusters_number: DEFAULT_CLUSTERS_NUMBER,
            seed: DEFAULT_SEED,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // Iteration cap and threading
    pub parameters: ParametersConfig, // Problem size and seed
}
