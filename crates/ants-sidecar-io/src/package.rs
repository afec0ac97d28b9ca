//! Versioned load/dump facade.
//!
//! Callers depend on these functions, never on a wire schema module
//! directly. Version dispatch lives here and nowhere else: the major
//! version of `schema_version` selects a wire module, and unknown majors
//! fail loudly instead of falling through.

use crate::error::{PackageError, Result};
use crate::wire::v1::SidecarV1;
use ants_sidecar_core::Sidecar;
use serde_json::Value;
use tracing::{debug, trace};

/// Load a sidecar from serialized JSON text.
pub fn load_package(json: &str) -> Result<Sidecar> {
    trace!(payload_bytes = json.len(), "parsing sidecar payload");
    let value: Value = serde_json::from_str(json)?;
    load_package_value(&value)
}

/// Load a sidecar from an already-structured JSON value.
pub fn load_package_value(value: &Value) -> Result<Sidecar> {
    let version = match value.get("schema_version") {
        None | Some(Value::Null) => return Err(PackageError::MissingSchemaVersion),
        Some(Value::String(version)) => version.clone(),
        Some(other) => other.to_string(),
    };
    if version.starts_with("1.") {
        debug!(version = %version, "loading v1 sidecar");
        let wire: SidecarV1 = serde_json::from_value(value.clone())?;
        return wire.to_internal();
    }
    Err(PackageError::UnsupportedVersion(version))
}

/// Serialize a sidecar to the wire form of its current schema version,
/// omitting absent optional fields.
pub fn dump_package(sidecar: &Sidecar) -> Result<String> {
    let wire = SidecarV1::from_internal(sidecar);
    debug!(version = %wire.schema_version, "dumping sidecar");
    Ok(serde_json::to_string(&wire)?)
}
