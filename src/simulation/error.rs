//! Error types and handling
//!
//! This module contains the top-level error type of the simulation. Errors of
//! the lower layers (configuration, distributions, queues) convert into it with
//! `?`.

use crate::queue::QueueError;
use crate::random::DistributionError;
use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration values are out of range
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// A distribution could not be built
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Queue operation failed (pop from an empty queue, unknown item)
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// A patient, worker or event id does not resolve
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Simulation state contradicts the event being processed
    #[error("Inconsistent simulation state: {0}")]
    InvariantViolation(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an unknown entity error
    pub fn unknown_entity(what: impl Into<String>) -> Self {
        Self::UnknownEntity(what.into())
    }

    /// Create an invariant violation error
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::Config(_) | SimulationError::Validation(_) => "Configuration",
            SimulationError::Distribution(_) => "Distribution",
            SimulationError::Queue(_) => "Queue",
            SimulationError::UnknownEntity(_) | SimulationError::InvariantViolation(_) => {
                "Invariant"
            }
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
