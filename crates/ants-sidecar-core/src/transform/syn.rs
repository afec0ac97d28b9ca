//! ANTs SyN transform triplet.
//!
//! A SyN registration produces three files: one affine matrix and a
//! forward/inverse pair of displacement fields. Mapping a point from
//! moving space to fixed space applies the nonlinear field first, then the
//! affine in its native direction; the reverse mapping applies the
//! inverted affine first, then the inverse field. Both fields are sampled
//! on the fixed grid.

use crate::chain::{Chain, FieldRole, Step};
use crate::error::{Result, SidecarError};

/// Conventional suffixes of ANTs registration outputs.
const AFFINE_SUFFIX: &str = "0GenericAffine.mat";
const WARP_SUFFIX: &str = "1Warp.nii.gz";
const INVERSE_WARP_SUFFIX: &str = "1InverseWarp.nii.gz";

/// Three-file representation of a SyN diffeomorphic transform.
///
/// All file references are opaque, non-empty strings; the triplet never
/// opens them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynTriplet {
    affine: String,
    warp: String,
    inverse_warp: String,
}

impl SynTriplet {
    /// Create a triplet, rejecting any empty file reference.
    ///
    /// # Arguments
    /// * `affine` - Affine matrix file, e.g. `0GenericAffine.mat`
    /// * `warp` - Forward warp field, e.g. `1Warp.nii.gz`
    /// * `inverse_warp` - Inverse warp field, e.g. `1InverseWarp.nii.gz`
    pub fn new(
        affine: impl Into<String>,
        warp: impl Into<String>,
        inverse_warp: impl Into<String>,
    ) -> Result<Self> {
        let affine = affine.into();
        let warp = warp.into();
        let inverse_warp = inverse_warp.into();
        if affine.is_empty() {
            return Err(SidecarError::empty_file_reference("affine"));
        }
        if warp.is_empty() {
            return Err(SidecarError::empty_file_reference("warp"));
        }
        if inverse_warp.is_empty() {
            return Err(SidecarError::empty_file_reference("inverse_warp"));
        }
        Ok(Self {
            affine,
            warp,
            inverse_warp,
        })
    }

    /// Build a triplet from an ANTs output prefix using the conventional
    /// suffixes (`<prefix>0GenericAffine.mat`, `<prefix>1Warp.nii.gz`,
    /// `<prefix>1InverseWarp.nii.gz`).
    pub fn from_output_prefix(prefix: &str) -> Self {
        Self {
            affine: format!("{prefix}{AFFINE_SUFFIX}"),
            warp: format!("{prefix}{WARP_SUFFIX}"),
            inverse_warp: format!("{prefix}{INVERSE_WARP_SUFFIX}"),
        }
    }

    /// The affine matrix file.
    pub fn affine(&self) -> &str {
        &self.affine
    }

    /// The forward warp field file.
    pub fn warp(&self) -> &str {
        &self.warp
    }

    /// The inverse warp field file.
    pub fn inverse_warp(&self) -> &str {
        &self.inverse_warp
    }

    /// Moving-to-fixed chain: forward field, then the affine un-inverted.
    pub fn forward_chain(&self) -> Chain {
        Chain::new(vec![
            Step::field(&self.warp, FieldRole::Forward),
            Step::affine(&self.affine, false),
        ])
    }

    /// Fixed-to-moving chain: the affine inverted, then the inverse field.
    pub fn inverse_chain(&self) -> Chain {
        Chain::new(vec![
            Step::affine(&self.affine, true),
            Step::field(&self.inverse_warp, FieldRole::Inverse),
        ])
    }
}
