pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Point, Centroid, ClusterAccumulator, NVec2i};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::error::{KmsimError, Result};
pub use simulation::initializer::{initialize, initialize_from, seed_points};
pub use simulation::iteration::{step, nearest_centroid, StepResult};
pub use simulation::scenario::{Scenario, RunState};

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_threads};
