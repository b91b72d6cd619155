//! Generated file contents.
//!
//! Everything here is a pure function from configuration to text or bytes.
//! Where a file lands and in what order is decided by the planner in the
//! application layer.

pub mod assets;
pub mod context;
pub mod gradle;
pub mod java;
pub mod manifest;

use serde::Serialize;

use crate::domain::error::DomainError;

pub use assets::LangTable;
pub use context::RenderContext;
pub use manifest::FabricManifest;

/// PNG file signature, written as a placeholder icon.
pub const PLACEHOLDER_PNG: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Pretty-printed JSON with a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    artifact: &str,
) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| DomainError::Serialization {
            artifact: artifact.to_string(),
            reason: e.to_string(),
        })
}
