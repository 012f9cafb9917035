pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod initializer;
pub mod iteration;
pub mod scenario;
