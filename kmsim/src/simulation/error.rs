//! Error type shared by the clustering core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KmsimError {
    /// A size parameter is outside its valid range. Raised before any state
    /// is allocated.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, KmsimError>;
