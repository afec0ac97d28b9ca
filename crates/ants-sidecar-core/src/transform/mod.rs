//! Transform operation variants.
//!
//! [`Operation`] is a closed discriminated union over transform
//! representations. Chain rendering matches exhaustively with no wildcard
//! arm, so adding a variant is compiler-checked for completeness.

pub mod syn;

pub use syn::SynTriplet;

use crate::chain::Chain;

/// A transform representation that can render directional chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// An ANTs SyN triplet: affine matrix plus forward/inverse warp fields.
    Syn(SynTriplet),
}

impl Operation {
    /// Wire tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syn(_) => "syn",
        }
    }

    /// Render the moving-to-fixed chain.
    pub fn forward_chain(&self) -> Chain {
        match self {
            Self::Syn(triplet) => triplet.forward_chain(),
        }
    }

    /// Render the fixed-to-moving chain.
    pub fn inverse_chain(&self) -> Chain {
        match self {
            Self::Syn(triplet) => triplet.inverse_chain(),
        }
    }
}
