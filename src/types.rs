//! Types specific to fdrelax

/// Real scalar values the grid computations are generic over.
pub trait RealScalar: num::Float {}

impl<T: num::Float> RealScalar for T {}

/// Generic error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A configuration value produced an unusable problem setup.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An emission target failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
