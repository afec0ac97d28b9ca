//! V1 wire schema and its conversion to and from the internal model.
//!
//! Absent optional fields are omitted on output, never emitted as null.
//! All model invariants run in [`SidecarV1::to_internal`]; deserializing a
//! wire struct alone validates nothing.

use crate::error::{PackageError, Result};
use ants_sidecar_core::sidecar::{FRAME, SCHEMA_VERSION, UNITS};
use ants_sidecar_core::{
    BBox, ContentSignature, Domain, GridDefinition, Operation, Sidecar, SynTriplet,
};
use serde::{Deserialize, Serialize};

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_owned()
}

fn default_frame() -> String {
    FRAME.to_owned()
}

fn default_units() -> String {
    UNITS.to_owned()
}

fn default_definition() -> String {
    "voxel-center".to_owned()
}

/// Top-level V1 persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidecarV1 {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_frame")]
    pub frame: String,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_domain: Option<DomainV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moving_domain: Option<DomainV1>,
    pub transform: OperationV1,
}

/// V1 domain record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainV1 {
    #[serde(default = "default_definition")]
    pub definition: String,
    pub spacing: [f64; 3],
    pub bbox: BBoxV1,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_canonical: Option<[u64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_signature: Option<SignatureV1>,
}

/// V1 bounding box: per-axis `[min, max]` pairs keyed by axis letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BBoxV1 {
    #[serde(rename = "L")]
    pub l: (f64, f64),
    #[serde(rename = "P")]
    pub p: (f64, f64),
    #[serde(rename = "S")]
    pub s: (f64, f64),
}

/// V1 content signature record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureV1 {
    pub method: String,
    pub blake2b: String,
}

/// V1 transform operation, discriminated on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationV1 {
    Syn {
        affine: String,
        warp: String,
        inverse_warp: String,
    },
}

impl SidecarV1 {
    /// Validate this wire record into the internal model.
    pub fn to_internal(&self) -> Result<Sidecar> {
        if self.frame != FRAME {
            return Err(PackageError::UnsupportedFrame(self.frame.clone()));
        }
        if self.units != UNITS {
            return Err(PackageError::UnsupportedUnits(self.units.clone()));
        }

        let fixed_domain = self.fixed_domain.as_ref().map(DomainV1::to_internal).transpose()?;
        let moving_domain = self.moving_domain.as_ref().map(DomainV1::to_internal).transpose()?;

        let transform = match &self.transform {
            OperationV1::Syn {
                affine,
                warp,
                inverse_warp,
            } => Operation::Syn(SynTriplet::new(affine, warp, inverse_warp)?),
        };

        Ok(Sidecar::assemble(transform, fixed_domain, moving_domain)?)
    }

    /// Render the internal model as a V1 wire record.
    pub fn from_internal(sidecar: &Sidecar) -> Self {
        let transform = match sidecar.transform() {
            Operation::Syn(triplet) => OperationV1::Syn {
                affine: triplet.affine().to_owned(),
                warp: triplet.warp().to_owned(),
                inverse_warp: triplet.inverse_warp().to_owned(),
            },
        };
        Self {
            schema_version: SCHEMA_VERSION.to_owned(),
            frame: FRAME.to_owned(),
            units: UNITS.to_owned(),
            fixed_domain: sidecar.fixed_domain().map(DomainV1::from_internal),
            moving_domain: sidecar.moving_domain().map(DomainV1::from_internal),
            transform,
        }
    }
}

impl DomainV1 {
    fn to_internal(&self) -> Result<Domain> {
        let bbox = BBox::new(self.bbox.l, self.bbox.p, self.bbox.s)?;
        let signature = self
            .spatial_signature
            .as_ref()
            .map(|sig| ContentSignature::new(&sig.method, &sig.blake2b));
        let domain = Domain::assemble(
            GridDefinition::from_name(&self.definition),
            self.spacing,
            bbox,
            self.shape_canonical,
            signature,
        )?;
        Ok(domain)
    }

    fn from_internal(domain: &Domain) -> Self {
        let signature = domain.spatial_signature();
        Self {
            definition: domain.definition().as_str().to_owned(),
            spacing: domain.spacing(),
            bbox: BBoxV1 {
                l: domain.bbox().l(),
                p: domain.bbox().p(),
                s: domain.bbox().s(),
            },
            shape_canonical: domain.shape_canonical(),
            spatial_signature: Some(SignatureV1 {
                method: signature.method().to_owned(),
                blake2b: signature.blake2b().to_owned(),
            }),
        }
    }
}
