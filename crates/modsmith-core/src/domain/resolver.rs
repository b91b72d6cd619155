//! Version resolution: Minecraft version → compatible dependency bundle.
//!
//! [`VersionResolver`] reads the tables in `compatibility.rs` by default but
//! can be pointed at any other tables, which is how the threshold-ordering
//! rule is tested independently of the shipped data.

use std::cmp::Ordering;

use crate::domain::{
    compatibility::{self, FABRIC_LOADER_VERSION, JavaThreshold},
    error::DomainError,
    value_objects::{JavaRequirement, PlatformVersion, compare_components},
};

/// Everything `build.gradle` and `fabric.mod.json` need to know about the
/// target version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyBundle {
    pub minecraft_version: String,
    pub fabric_api_version: &'static str,
    pub loom_version: &'static str,
    pub loader_version: &'static str,
    pub java: JavaRequirement,
}

impl DependencyBundle {
    /// Yarn mappings coordinate for this Minecraft version.
    pub fn yarn_mappings(&self) -> String {
        format!("{}+build.1:v2", self.minecraft_version)
    }
}

/// First row whose threshold is `<=` the target, in slice order.
///
/// This is a first-match scan, not a best-match search: `thresholds` must be
/// sorted newest first or an older row will shadow a newer one.
pub fn first_matching_threshold<'a>(
    thresholds: &'a [JavaThreshold],
    target: &PlatformVersion,
) -> Option<&'a JavaThreshold> {
    thresholds
        .iter()
        .find(|row| compare_components(row.threshold, target.components()) != Ordering::Greater)
}

/// Resolves dependency versions for a target Minecraft version.
#[derive(Debug, Clone, Copy)]
pub struct VersionResolver {
    api_versions: &'static [(&'static str, &'static str)],
    loom_versions: &'static [(&'static str, &'static str)],
    java_requirements: &'static [JavaThreshold],
}

impl VersionResolver {
    /// Resolver over the built-in compatibility tables.
    pub const fn new() -> Self {
        Self {
            api_versions: compatibility::FABRIC_API_VERSIONS,
            loom_versions: compatibility::LOOM_VERSIONS,
            java_requirements: compatibility::JAVA_REQUIREMENTS,
        }
    }

    /// Resolver over caller-supplied tables.
    pub const fn with_tables(
        api_versions: &'static [(&'static str, &'static str)],
        loom_versions: &'static [(&'static str, &'static str)],
        java_requirements: &'static [JavaThreshold],
    ) -> Self {
        Self {
            api_versions,
            loom_versions,
            java_requirements,
        }
    }

    /// Fabric API version for `target`.
    pub fn resolve_dependency_version(
        &self,
        target: &PlatformVersion,
    ) -> Result<&'static str, DomainError> {
        compatibility::lookup(self.api_versions, target.as_str()).ok_or_else(|| {
            DomainError::UnresolvedDependency {
                table: "fabric-api",
                version: target.to_string(),
            }
        })
    }

    /// Fabric Loom plugin version for `target`.
    pub fn resolve_toolchain_plugin_version(
        &self,
        target: &PlatformVersion,
    ) -> Result<&'static str, DomainError> {
        compatibility::lookup(self.loom_versions, target.as_str()).ok_or_else(|| {
            DomainError::UnresolvedDependency {
                table: "fabric-loom",
                version: target.to_string(),
            }
        })
    }

    /// Java requirement for `target`, or [`JavaRequirement::FLOOR`] when no
    /// threshold applies.
    pub fn resolve_required_toolchain(&self, target: &PlatformVersion) -> JavaRequirement {
        first_matching_threshold(self.java_requirements, target)
            .map(|row| row.requirement)
            .unwrap_or(JavaRequirement::FLOOR)
    }

    /// All of the above in one bundle.
    pub fn resolve(&self, target: &PlatformVersion) -> Result<DependencyBundle, DomainError> {
        Ok(DependencyBundle {
            minecraft_version: target.to_string(),
            fabric_api_version: self.resolve_dependency_version(target)?,
            loom_version: self.resolve_toolchain_plugin_version(target)?,
            loader_version: FABRIC_LOADER_VERSION,
            java: self.resolve_required_toolchain(target),
        })
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compatibility::{FABRIC_API_VERSIONS, LOOM_VERSIONS, VALID_VERSIONS};

    fn v(s: &str) -> PlatformVersion {
        PlatformVersion::parse(s).unwrap()
    }

    // ── table lookups ─────────────────────────────────────────────────────────

    #[test]
    fn every_valid_version_resolves_verbatim_table_values() {
        let resolver = VersionResolver::new();
        for version in VALID_VERSIONS {
            let target = v(version);

            let api = resolver.resolve_dependency_version(&target).unwrap();
            assert!(!api.is_empty());
            assert!(FABRIC_API_VERSIONS.contains(&(*version, api)));

            let loom = resolver.resolve_toolchain_plugin_version(&target).unwrap();
            assert!(!loom.is_empty());
            assert!(LOOM_VERSIONS.contains(&(*version, loom)));
        }
    }

    #[test]
    fn unknown_version_is_unresolved_dependency() {
        let resolver = VersionResolver::new();
        let err = resolver.resolve_dependency_version(&v("1.12.2")).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedDependency {
                table: "fabric-api",
                version: "1.12.2".into()
            }
        );
        assert!(resolver.resolve_toolchain_plugin_version(&v("1.12.2")).is_err());
    }

    #[test]
    fn known_values_for_latest_version() {
        let bundle = VersionResolver::new().resolve(&v("1.21.4")).unwrap();
        assert_eq!(bundle.fabric_api_version, "0.84.0+1.21.4");
        assert_eq!(bundle.loom_version, "0.13.4");
        assert_eq!(bundle.loader_version, "0.15.3");
        assert_eq!(bundle.java, JavaRequirement::new(21, 21));
        assert_eq!(bundle.yarn_mappings(), "1.21.4+build.1:v2");
    }

    // ── Java thresholds ───────────────────────────────────────────────────────

    #[test]
    fn java_requirement_boundaries() {
        let resolver = VersionResolver::new();
        assert_eq!(resolver.resolve_required_toolchain(&v("1.16.5")).min, 8);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.17")).min, 16);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.17.1")).min, 16);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.18")).min, 17);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.20.4")).min, 17);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.20.5")).min, 21);
        assert_eq!(resolver.resolve_required_toolchain(&v("1.21.4")).min, 21);
    }

    #[test]
    fn no_matching_threshold_returns_floor() {
        let resolver = VersionResolver::new();
        assert_eq!(
            resolver.resolve_required_toolchain(&v("1.14")),
            JavaRequirement::FLOOR
        );
        assert_eq!(JavaRequirement::FLOOR, JavaRequirement::new(8, 8));
    }

    #[test]
    fn required_toolchain_is_monotonic_over_valid_versions() {
        let resolver = VersionResolver::new();
        let mins: Vec<u32> = VALID_VERSIONS
            .iter()
            .map(|version| resolver.resolve_required_toolchain(&v(version)).min)
            .collect();
        assert!(
            mins.windows(2).all(|w| w[0] <= w[1]),
            "java minimums not monotonic: {mins:?}"
        );
    }

    #[test]
    fn first_match_wins_over_best_match() {
        static MISORDERED: &[JavaThreshold] = &[
            JavaThreshold::new(&[1, 17], 16, 17),
            JavaThreshold::new(&[1, 20, 5], 21, 21),
        ];
        let target = v("1.21");

        // A newest-last table returns the older requirement.
        let hit = first_matching_threshold(MISORDERED, &target).unwrap();
        assert_eq!(hit.requirement.min, 16);

        let misordered = VersionResolver::with_tables(&[], &[], MISORDERED);
        assert_eq!(misordered.resolve_required_toolchain(&target).min, 16);
        assert_eq!(
            VersionResolver::new().resolve_required_toolchain(&target).min,
            21
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        static ROWS: &[JavaThreshold] = &[JavaThreshold::new(&[1, 18], 17, 17)];
        assert!(first_matching_threshold(ROWS, &v("1.18")).is_some());
        assert!(first_matching_threshold(ROWS, &v("1.18.0")).is_some());
        assert!(first_matching_threshold(ROWS, &v("1.17.1")).is_none());
    }
}
