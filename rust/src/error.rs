//! Error types for the benchmark harness

use thiserror::Error;

pub type Result<T, E = BenchError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum BenchError {
    /// A strategy failed to encode the payload
    #[error("{strategy}: encode failed: {message}")]
    Encode {
        strategy: String,
        message: String,
    },

    /// A strategy failed to decode its own output
    #[error("{strategy}: decode failed: {message}")]
    Decode {
        strategy: String,
        message: String,
    },

    /// Encoded length changed between iterations of the same input
    #[error("{strategy}: encoded size changed from {expected} to {actual} bytes")]
    SizeMismatch {
        strategy: String,
        expected: usize,
        actual: usize,
    },

    /// Round trip produced a value different from the input
    #[error("{strategy}: decoded value differs from input (iteration {iteration})")]
    ValidationFailed { strategy: String, iteration: usize },

    #[error("iteration count must be at least 1")]
    InvalidIterationCount,
}

impl BenchError {
    pub fn encode(strategy: &str, err: impl std::fmt::Display) -> Self {
        BenchError::Encode {
            strategy: strategy.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(strategy: &str, err: impl std::fmt::Display) -> Self {
        BenchError::Decode {
            strategy: strategy.to_string(),
            message: err.to_string(),
        }
    }
}
