// src/error.rs
//! Error type shared by gate and circuit construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CircuitError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CircuitError::InvalidArgument { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, CircuitError>;
