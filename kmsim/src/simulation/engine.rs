//! High-level runtime engine settings
//!
//! Holds the iteration cap and worker count used when building and
//! running a `Scenario`

use crate::configuration::config::EngineConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub max_iterations: u64, // the run stops after this many steps
    pub threads: Option<usize>, // rayon workers, None = one per core
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            max_iterations: cfg.max_iterations,
            threads: cfg.threads,
        }
    }
}
