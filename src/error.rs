use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("genome has {got} weights, topology wants {expected}")]
    GenomeLength { expected: usize, got: usize },
    #[error("genomes differ in length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("population is empty")]
    EmptyPopulation,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
