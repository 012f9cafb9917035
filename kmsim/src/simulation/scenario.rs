//! Build fully-initialized clustering scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - validated parameters (`Parameters`)
//! - the seeded points and the current centroids
//! - the last assignment (labels and cardinalities)
//! - the worker pool every step runs on
//!
//! The scenario also owns the run state machine: it keeps stepping while
//! `Running` and ends in `Converged` (no centroid moved) or `Stopped`
//! (iteration cap reached). Elapsed time is left to the caller.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::{KmsimError, Result};
use crate::simulation::initializer::initialize_from;
use crate::simulation::iteration::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Centroid, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Converged, // the last step moved no centroid
    Stopped,   // iteration cap reached first
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        self != RunState::Running
    }
}

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    labels: Vec<usize>,
    cardinalities: Vec<u64>,
    iterations: u64,
    state: RunState,
    pool: ThreadPool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig, rejected before any allocation
        let parameters = Parameters::try_from(&cfg.parameters)?;

        // Engine (runtime) from EngineConfig
        let engine = Engine::from(&cfg.engine);

        let (points, centroids) = initialize_from(&parameters);

        Self::from_state(engine, parameters, points, centroids)
    }

    /// Build a scenario around points and centroids seeded elsewhere
    ///
    /// `parameters` must describe the given state: its point and cluster
    /// counts have to equal the vector lengths.
    pub fn from_state(engine: Engine, parameters: Parameters, points: Vec<Point>, centroids: Vec<Centroid>) -> Result<Self> {
        if points.is_empty() || points.len() != parameters.points_number {
            return Err(KmsimError::InvalidConfiguration {
                field: "points_number",
                value: parameters.points_number as i64,
                reason: "must be positive and match the number of points",
            });
        }
        if centroids.is_empty() || centroids.len() != parameters.clusters_number {
            return Err(KmsimError::InvalidConfiguration {
                field: "clusters_number",
                value: parameters.clusters_number as i64,
                reason: "must be positive and match the number of centroids",
            });
        }

        let mut builder = ThreadPoolBuilder::new();
        if let Some(n) = engine.threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;

        let k = centroids.len();
        Ok(Self {
            engine,
            parameters,
            points,
            centroids,
            labels: Vec::new(),
            cardinalities: vec![0; k],
            iterations: 0,
            state: RunState::Running,
            pool,
        })
    }

    /// Run one step and store its outcome. Returns whether any centroid moved.
    pub fn step(&mut self) -> bool {
        let points = &self.points;
        let centroids = &self.centroids;
        let result = self.pool.install(|| step(points, centroids));

        self.centroids = result.centroids;
        self.cardinalities = result.cardinalities;
        self.labels = result.labels;
        self.iterations += 1;

        tracing::trace!(iteration = self.iterations, changed = result.changed, "step");
        result.changed
    }

    /// Advance the state machine by one step, unless already terminal
    pub fn advance(&mut self) -> RunState {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.iterations >= self.engine.max_iterations {
            self.state = RunState::Stopped;
        } else if !self.step() {
            self.state = RunState::Converged;
        } else if self.iterations >= self.engine.max_iterations {
            self.state = RunState::Stopped;
        }

        if self.state.is_terminal() {
            tracing::info!(state = ?self.state, iterations = self.iterations, "clustering finished");
        }
        self.state
    }

    /// Step until converged or stopped
    pub fn run(&mut self) -> RunState {
        while !self.state.is_terminal() {
            self.advance();
        }
        self.state
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Cluster of every point in the last step, empty before the first one
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn label(&self, point: usize) -> Option<usize> {
        self.labels.get(point).copied()
    }

    pub fn cardinalities(&self) -> &[u64] {
        &self.cardinalities
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn state(&self) -> RunState {
        self.state
    }
}
