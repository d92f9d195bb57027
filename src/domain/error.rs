use thiserror::Error;

/// Errors surfaced to a harness. Contract violations inside a step panic instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// The body store already holds `capacity` bodies.
    #[error("body store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Body description failed validation.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Configuration could not be parsed or is out of range.
    #[error("invalid config: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
