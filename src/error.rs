//! Error types for ST boundary mapping.

use crate::ObstacleId;
use thiserror::Error;

/// Errors that can occur while mapping obstacles onto the ST graph.
#[derive(Debug, Error)]
pub enum MapperError {
    /// The inputs to the mapper are unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The ego path had no samples when an obstacle was being mapped.
    #[error("vehicle path is empty while mapping obstacle {obstacle_id}")]
    EmptyPath {
        /// The obstacle being mapped.
        obstacle_id: ObstacleId,
    },

    /// Mapping a specific obstacle failed.
    #[error("failed to map obstacle {obstacle_id}: {source}")]
    MappingFailure {
        /// The obstacle that could not be mapped.
        obstacle_id: ObstacleId,
        /// The underlying failure.
        source: Box<MapperError>,
    },

    /// A configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MapperError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates an empty path error.
    #[must_use]
    pub fn empty_path(obstacle_id: ObstacleId) -> Self {
        Self::EmptyPath { obstacle_id }
    }

    /// Wraps the failure to map an obstacle.
    #[must_use]
    pub fn mapping_failure(obstacle_id: ObstacleId, source: MapperError) -> Self {
        Self::MappingFailure {
            obstacle_id,
            source: Box::new(source),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// The obstacle the error refers to, if any.
    pub fn obstacle_id(&self) -> Option<&ObstacleId> {
        match self {
            Self::EmptyPath { obstacle_id } | Self::MappingFailure { obstacle_id, .. } => {
                Some(obstacle_id)
            }
            Self::InvalidInput(_) | Self::Config(_) => None,
        }
    }
}

/// Result type for ST boundary mapping.
pub type Result<T> = std::result::Result<T, MapperError>;
