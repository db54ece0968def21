//! Error types for grid construction, rule parsing and configuration.

use thiserror::Error;

/// Main error type for nd-life operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty shape, a zero-length axis, or a cell buffer that does not fit the shape
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Malformed `<survive>/<born>` rule descriptor
    #[error("Invalid variant: {0}")]
    InvalidVariant(String),

    /// Direct cell access outside the grid
    #[error("Coordinate {coordinate:?} is out of bounds for shape {shape:?}")]
    OutOfBounds {
        coordinate: Vec<usize>,
        shape: Vec<usize>,
    },

    /// Configuration file parsing errors
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// File system and terminal errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for nd-life operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid shape error.
    #[must_use]
    pub fn invalid_shape<S: Into<String>>(msg: S) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Creates a new invalid variant error.
    #[must_use]
    pub fn invalid_variant<S: Into<String>>(msg: S) -> Self {
        Self::InvalidVariant(msg.into())
    }

    /// Creates a new out-of-bounds error for `coordinate` on a grid of `shape`.
    #[must_use]
    pub fn out_of_bounds(coordinate: &[usize], shape: &[usize]) -> Self {
        Self::OutOfBounds {
            coordinate: coordinate.to_vec(),
            shape: shape.to_vec(),
        }
    }
}
