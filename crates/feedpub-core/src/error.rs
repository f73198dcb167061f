use thiserror::Error;

use crate::feed_config::FeedLeg;
use crate::registry::RegistryError;

/// Validation and contract errors exposed by `feedpub-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feed config is missing 'publishInterval'")]
    MissingPublishInterval,
    #[error("feed config is missing 'minDelay'")]
    MissingMinDelay,
    #[error("feed config is missing 'numerator'")]
    MissingNumerator,
    #[error("{leg} asset is missing 'dataSource'")]
    MissingDataSource { leg: FeedLeg },
    #[error("{leg} asset is missing 'assetName'")]
    MissingAssetName { leg: FeedLeg },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
