//! Rendered transform chains.
//!
//! A chain is an ordered, directional sequence of application steps derived
//! from an operation. Chains are ephemeral values: they are rendered on
//! demand and never persisted.

pub mod chain;
pub mod step;

pub use chain::{Chain, ChainOrder};
pub use step::{FieldGrid, FieldRole, Step};
