//! Wire schemas, one module per schema major version.
//!
//! Wire structs are dumb serde mirrors of the persisted JSON; the internal
//! model is only reachable through them via validating conversions. The
//! internal model is free to diverge from any wire version over time.

pub mod v1;
