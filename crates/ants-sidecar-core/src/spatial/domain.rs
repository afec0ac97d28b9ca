//! Layout-invariant domain description of a coordinate grid.
//!
//! A [`Domain`] records canonical spacing, a center-to-center bounding box,
//! and optional voxel counts, together with a verified content signature of
//! that geometry. Construction either computes the signature or verifies a
//! supplied one; a constructed `Domain` always holds a valid signature.

use super::bbox::BBox;
use super::signature::{spatial_signature, ContentSignature};
use super::Axis;
use crate::error::{Result, SidecarError};

/// Geometric convention under which bbox bounds are measured.
///
/// Only `voxel-center` is defined today. Unknown names are preserved
/// verbatim and hash with tag 0, keeping the signature total over future
/// conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridDefinition {
    /// Bounds measured at voxel centers.
    VoxelCenter,
    /// An unrecognized convention, preserved verbatim.
    Other(String),
}

impl GridDefinition {
    /// Parse a definition name; unknown names become [`Self::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "voxel-center" => Self::VoxelCenter,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire name of this definition.
    pub fn as_str(&self) -> &str {
        match self {
            Self::VoxelCenter => "voxel-center",
            Self::Other(name) => name,
        }
    }

    /// Small integer tag mixed into the spatial hash.
    pub(crate) fn hash_tag(&self) -> i64 {
        match self {
            Self::VoxelCenter => 1,
            Self::Other(_) => 0,
        }
    }
}

impl Default for GridDefinition {
    fn default() -> Self {
        Self::VoxelCenter
    }
}

/// Layout-invariant domain definition in LPS.
///
/// Immutable once constructed. Invariants:
/// - spacing entries are strictly positive and finite;
/// - shape entries, when present, are strictly positive;
/// - the stored signature always matches the recomputed canonical hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    definition: GridDefinition,
    spacing: [f64; 3],
    bbox: BBox,
    shape_canonical: Option<[u64; 3]>,
    spatial_signature: ContentSignature,
}

impl Domain {
    /// Create a voxel-center domain, computing its signature.
    ///
    /// # Arguments
    /// * `spacing` - Canonical spacing per LPS axis, in mm
    /// * `bbox` - Center-to-center bounds
    /// * `shape_canonical` - Voxel counts per axis, when known
    pub fn new(spacing: [f64; 3], bbox: BBox, shape_canonical: Option<[u64; 3]>) -> Result<Self> {
        Self::assemble(GridDefinition::VoxelCenter, spacing, bbox, shape_canonical, None)
    }

    /// Create a voxel-center domain, verifying a caller-supplied signature.
    ///
    /// The supplied digest must exactly equal the recomputed one; mismatch
    /// fails construction with both digests in the error.
    pub fn with_signature(
        spacing: [f64; 3],
        bbox: BBox,
        shape_canonical: Option<[u64; 3]>,
        signature: ContentSignature,
    ) -> Result<Self> {
        Self::assemble(
            GridDefinition::VoxelCenter,
            spacing,
            bbox,
            shape_canonical,
            Some(signature),
        )
    }

    /// Create a domain under an explicit grid definition.
    ///
    /// With `signature` absent the canonical signature is computed and
    /// stored; with it present, its digest is verified against the
    /// recomputed one.
    pub fn assemble(
        definition: GridDefinition,
        spacing: [f64; 3],
        bbox: BBox,
        shape_canonical: Option<[u64; 3]>,
        signature: Option<ContentSignature>,
    ) -> Result<Self> {
        for (axis, &s) in Axis::ALL.iter().zip(&spacing) {
            if s <= 0.0 || !s.is_finite() {
                return Err(SidecarError::InvalidSpacing { axis: *axis, value: s });
            }
        }
        if let Some(shape) = shape_canonical {
            for (axis, &n) in Axis::ALL.iter().zip(&shape) {
                if n == 0 {
                    return Err(SidecarError::InvalidShape { axis: *axis });
                }
            }
        }

        let computed = spatial_signature(&spacing, &bbox, shape_canonical.as_ref(), &definition)?;
        let spatial_signature = match signature {
            None => computed,
            Some(provided) => {
                if provided.blake2b() != computed.blake2b() {
                    return Err(SidecarError::signature_mismatch(
                        provided.blake2b(),
                        computed.blake2b(),
                    ));
                }
                provided
            }
        };

        Ok(Self {
            definition,
            spacing,
            bbox,
            shape_canonical,
            spatial_signature,
        })
    }

    /// The grid definition convention.
    pub fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    /// Canonical spacing per LPS axis.
    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    /// Center-to-center bounds.
    pub fn bbox(&self) -> &BBox {
        &self.bbox
    }

    /// Voxel counts per axis, when known.
    pub fn shape_canonical(&self) -> Option<[u64; 3]> {
        self.shape_canonical
    }

    /// The verified content signature of this geometry.
    pub fn spatial_signature(&self) -> &ContentSignature {
        &self.spatial_signature
    }

    /// Total voxel count, when the canonical shape is known.
    pub fn voxel_count(&self) -> Option<u64> {
        self.shape_canonical
            .map(|shape| shape.iter().product())
    }
}
