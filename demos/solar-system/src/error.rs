use thiserror::Error;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the body registry and simulation state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimError {
    /// Unknown body name, or a value outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimError {
    pub fn unknown_body(name: &str) -> Self {
        Self::InvalidArgument(format!("unknown body '{name}'"))
    }
}
