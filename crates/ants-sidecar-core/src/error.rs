//! Error types for sidecar model construction.
//!
//! Every invariant is checked eagerly at construction time and fails the
//! entire construction. There is no partially-valid value and no retry
//! semantic; these are deterministic logical errors.

use crate::spatial::Axis;
use thiserror::Error;

/// Main error type for sidecar model operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SidecarError {
    /// A bbox axis with min > max.
    #[error("bbox[{axis}] min must be <= max (got min={min}, max={max})")]
    BBoxNotMonotonic { axis: Axis, min: f64, max: f64 },

    /// A bbox axis containing a non-finite bound.
    #[error("bbox[{axis}] contains non-finite value")]
    BBoxNotFinite { axis: Axis },

    /// A spacing entry that is not strictly positive and finite.
    #[error("spacing[{axis}] must be positive and finite (got {value})")]
    InvalidSpacing { axis: Axis, value: f64 },

    /// A canonical shape entry that is zero.
    #[error("shape_canonical[{axis}] must be positive")]
    InvalidShape { axis: Axis },

    /// A non-finite float reached the spatial canonicalizer.
    #[error("non-finite float in domain geometry: {value}")]
    NonFiniteValue { value: f64 },

    /// A supplied spatial signature does not match the recomputed one.
    #[error("spatial_signature mismatch: provided={provided} computed={computed}")]
    SignatureMismatch { provided: String, computed: String },

    /// Exactly one of fixed_domain / moving_domain was supplied.
    #[error("provide both fixed_domain and moving_domain or neither")]
    UnpairedDomains,

    /// A transform file reference that is empty.
    #[error("transform field '{field}' must be a non-empty file reference")]
    EmptyFileReference { field: &'static str },
}

/// Result type for sidecar model operations.
pub type Result<T> = std::result::Result<T, SidecarError>;

impl SidecarError {
    /// Create a signature mismatch error from the two digest strings.
    pub fn signature_mismatch(provided: impl Into<String>, computed: impl Into<String>) -> Self {
        Self::SignatureMismatch {
            provided: provided.into(),
            computed: computed.into(),
        }
    }

    /// Create an empty file reference error for the named field.
    pub fn empty_file_reference(field: &'static str) -> Self {
        Self::EmptyFileReference { field }
    }
}
