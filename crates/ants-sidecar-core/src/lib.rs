pub mod chain;
pub mod error;
pub mod sidecar;
pub mod spatial;
pub mod transform;

pub use chain::{Chain, ChainOrder, FieldGrid, FieldRole, Step};
pub use error::{Result, SidecarError};
pub use sidecar::Sidecar;
pub use spatial::{Axis, BBox, ContentSignature, Domain, GridDefinition};
pub use transform::{Operation, SynTriplet};
