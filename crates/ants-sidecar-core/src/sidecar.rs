//! The sidecar envelope: the unit of persistence.
//!
//! A [`Sidecar`] wraps one transform operation together with optional
//! fixed/moving domain descriptions. Domains travel as a pair: supplying
//! exactly one of them is a construction error.

use crate::chain::Chain;
use crate::error::{Result, SidecarError};
use crate::spatial::Domain;
use crate::transform::Operation;

/// Schema version emitted by the current wire format.
pub const SCHEMA_VERSION: &str = "1.0";

/// Anatomical frame all sidecar coordinates are expressed in.
pub const FRAME: &str = "LPS";

/// Physical units of all sidecar coordinates.
pub const UNITS: &str = "mm";

/// In-memory sidecar record describing one registration transform.
///
/// Frame and units are fixed model constants (LPS, mm); the wire layer
/// emits them. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidecar {
    fixed_domain: Option<Domain>,
    moving_domain: Option<Domain>,
    transform: Operation,
}

impl Sidecar {
    /// Create a sidecar without domain descriptions.
    pub fn new(transform: Operation) -> Self {
        Self {
            fixed_domain: None,
            moving_domain: None,
            transform,
        }
    }

    /// Create a sidecar carrying both domain descriptions.
    pub fn with_domains(transform: Operation, fixed: Domain, moving: Domain) -> Self {
        Self {
            fixed_domain: Some(fixed),
            moving_domain: Some(moving),
            transform,
        }
    }

    /// Assemble from optional domains, enforcing the both-or-neither rule.
    ///
    /// Used by the wire layer, where each domain arrives independently.
    pub fn assemble(
        transform: Operation,
        fixed_domain: Option<Domain>,
        moving_domain: Option<Domain>,
    ) -> Result<Self> {
        if fixed_domain.is_some() != moving_domain.is_some() {
            return Err(SidecarError::UnpairedDomains);
        }
        Ok(Self {
            fixed_domain,
            moving_domain,
            transform,
        })
    }

    /// The fixed-image domain, when recorded.
    pub fn fixed_domain(&self) -> Option<&Domain> {
        self.fixed_domain.as_ref()
    }

    /// The moving-image domain, when recorded.
    pub fn moving_domain(&self) -> Option<&Domain> {
        self.moving_domain.as_ref()
    }

    /// The wrapped transform operation.
    pub fn transform(&self) -> &Operation {
        &self.transform
    }

    /// Render the moving-to-fixed chain of the wrapped operation.
    pub fn forward_chain(&self) -> Chain {
        self.transform.forward_chain()
    }

    /// Render the fixed-to-moving chain of the wrapped operation.
    pub fn inverse_chain(&self) -> Chain {
        self.transform.inverse_chain()
    }
}
