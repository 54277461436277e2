//! The capabilities this server exposes.
//!
//! Both are pure: `add` depends only on its inputs and `ping` always
//! returns the same payload.

use crate::error::RegistryError;
use crate::registry::{ResourceEntry, ResourceRegistry};

/// URI of the liveness resource.
pub const PING_URI: &str = "status://ping";

/// Payload returned by [`PING_URI`].
pub const PING_PAYLOAD: &str = "ok";

/// Add two integers, `None` if the sum leaves the `i64` range.
pub fn add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn ping() -> String {
    PING_PAYLOAD.to_string()
}

/// Build the registry with every resource this server serves.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if two built-in resources share a URI.
pub fn default_resources() -> Result<ResourceRegistry, RegistryError> {
    let mut registry = ResourceRegistry::new();
    registry.register(
        ResourceEntry::new(PING_URI, "ping", ping)
            .with_description("Liveness check; reads \"ok\"")
            .with_mime_type("text/plain"),
    )?;
    Ok(registry)
}
