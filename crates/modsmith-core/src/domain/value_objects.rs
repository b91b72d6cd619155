//! Domain value objects: PlatformVersion, EntityKind, JavaRequirement.
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold NO table data; compatibility lookups live in `compatibility.rs` and
//! `resolver.rs`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── PlatformVersion ───────────────────────────────────────────────────────────

/// A dotted numeric Minecraft version such as `1.20.4`.
///
/// Ordering is component-wise over integers, with the shorter version
/// right-padded with zeros: `1.21 == 1.21.0 < 1.21.4 < 1.22`.
///
/// The original string is kept for display and table lookups, so `1.21`
/// and `1.21.0` compare equal but still print as written.
#[derive(Debug, Clone)]
pub struct PlatformVersion {
    raw: String,
    components: Vec<u32>,
}

impl PlatformVersion {
    /// Parse a version string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidVersion {
                version: raw,
                reason: "version is empty".into(),
            });
        }

        let components = raw
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|_| DomainError::InvalidVersion {
                    version: raw.clone(),
                    reason: format!("component '{part}' is not a number"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { raw, components })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }
}

/// Compare two component lists, padding the shorter one with zeros.
pub fn compare_components(a: &[u32], b: &[u32]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

impl PartialEq for PlatformVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PlatformVersion {}

impl PartialOrd for PlatformVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlatformVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components, &other.components)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PlatformVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── EntityKind ────────────────────────────────────────────────────────────────

/// The two kinds of registrable game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Block,
    Item,
}

impl EntityKind {
    /// Also the asset sub-directory name (`textures/item`, `models/block`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── JavaRequirement ───────────────────────────────────────────────────────────

/// Java major versions needed to build a mod for a given Minecraft version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavaRequirement {
    pub min: u32,
    pub recommended: u32,
}

impl JavaRequirement {
    /// Returned when no threshold matches (pre-1.17 versions).
    pub const FLOOR: Self = Self::new(8, 8);

    pub const fn new(min: u32, recommended: u32) -> Self {
        Self { min, recommended }
    }
}

impl fmt::Display for JavaRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.recommended {
            write!(f, "Java {}", self.min)
        } else {
            write!(f, "Java {} (recommended {})", self.min, self.recommended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> PlatformVersion {
        PlatformVersion::parse(s).unwrap()
    }

    #[test]
    fn parses_components() {
        assert_eq!(v("1.20.4").components(), &[1, 20, 4]);
        assert_eq!(v("1.21").components(), &[1, 21]);
    }

    #[test]
    fn shorter_version_is_zero_padded() {
        assert_eq!(v("1.21"), v("1.21.0"));
        assert!(v("1.21") < v("1.21.1"));
    }

    #[test]
    fn comparison_is_numeric_not_lexical() {
        // "1.9" > "1.10" as strings, but not as versions.
        assert!(v("1.9") < v("1.10"));
        assert!(v("1.20.10") > v("1.20.9"));
    }

    #[test]
    fn display_keeps_original_spelling() {
        assert_eq!(v("1.21").to_string(), "1.21");
        assert_eq!(v("1.21.0").to_string(), "1.21.0");
    }

    #[test]
    fn rejects_non_numeric_and_empty() {
        assert!(matches!(
            PlatformVersion::parse("1.20-pre1"),
            Err(DomainError::InvalidVersion { .. })
        ));
        assert!(PlatformVersion::parse("").is_err());
        assert!(PlatformVersion::parse("1..2").is_err());
    }

    #[test]
    fn compare_components_handles_unequal_lengths() {
        assert_eq!(compare_components(&[1, 18], &[1, 18, 0, 0]), Ordering::Equal);
        assert_eq!(compare_components(&[1, 18], &[1, 17, 1]), Ordering::Greater);
        assert_eq!(compare_components(&[], &[0]), Ordering::Equal);
    }

    #[test]
    fn entity_kind_names_asset_directories() {
        assert_eq!(EntityKind::Item.to_string(), "item");
        assert_eq!(EntityKind::Block.as_str(), "block");
    }

    #[test]
    fn java_requirement_display() {
        assert_eq!(JavaRequirement::new(17, 17).to_string(), "Java 17");
        assert_eq!(
            JavaRequirement::new(16, 17).to_string(),
            "Java 16 (recommended 17)"
        );
    }
}
