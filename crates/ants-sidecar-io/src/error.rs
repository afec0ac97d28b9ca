//! Error types for the sidecar wire boundary.

use ants_sidecar_core::SidecarError;
use thiserror::Error;

/// Main error type for loading and dumping sidecar packages.
#[derive(Error, Debug)]
pub enum PackageError {
    /// The payload is not valid JSON or does not match the wire schema.
    #[error("invalid sidecar payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload carries no `schema_version` field.
    #[error("missing 'schema_version'")]
    MissingSchemaVersion,

    /// The payload names a schema major version with no registered handler.
    #[error("unsupported schema_version: {0}")]
    UnsupportedVersion(String),

    /// The payload names a coordinate frame other than LPS.
    #[error("unsupported frame: '{0}' (expected 'LPS')")]
    UnsupportedFrame(String),

    /// The payload names units other than mm.
    #[error("unsupported units: '{0}' (expected 'mm')")]
    UnsupportedUnits(String),

    /// A model invariant failed while validating the payload.
    #[error(transparent)]
    Model(#[from] SidecarError),
}

/// Result type for package operations.
pub type Result<T> = std::result::Result<T, PackageError>;
