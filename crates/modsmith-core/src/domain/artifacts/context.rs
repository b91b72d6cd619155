use std::collections::BTreeMap;

use crate::domain::{
    compatibility::GRADLE_VERSION, entities::ModConfiguration, resolver::DependencyBundle,
};

/// Variables available to the build-file templates.
///
/// # Standard variables
///
/// | Variable             | Example                |
/// |----------------------|------------------------|
/// | `MOD_ID`             | `examplemod`           |
/// | `MOD_NAME`           | `Example Mod`          |
/// | `MOD_VERSION`        | `1.0.0`                |
/// | `GROUP`              | `com.example`          |
/// | `MINECRAFT_VERSION`  | `1.21.4`               |
/// | `YARN_MAPPINGS`      | `1.21.4+build.1:v2`    |
/// | `LOADER_VERSION`     | `0.15.3`               |
/// | `FABRIC_API_VERSION` | `0.84.0+1.21.4`        |
/// | `LOOM_VERSION`       | `0.13.4`               |
/// | `JAVA_VERSION`       | `21`                   |
/// | `GRADLE_VERSION`     | `8.10`                 |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context populated with every standard variable.
    pub fn for_project(config: &ModConfiguration, bundle: &DependencyBundle) -> Self {
        Self::new()
            .with_variable("MOD_ID", config.mod_id())
            .with_variable("MOD_NAME", config.mod_name())
            .with_variable("MOD_VERSION", config.version())
            .with_variable("GROUP", config.group())
            .with_variable("MINECRAFT_VERSION", bundle.minecraft_version.as_str())
            .with_variable("YARN_MAPPINGS", bundle.yarn_mappings())
            .with_variable("LOADER_VERSION", bundle.loader_version)
            .with_variable("FABRIC_API_VERSION", bundle.fabric_api_version)
            .with_variable("LOOM_VERSION", bundle.loom_version)
            .with_variable("JAVA_VERSION", bundle.java.min.to_string())
            .with_variable("GRADLE_VERSION", GRADLE_VERSION)
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder in a single left-to-right pass.
    ///
    /// Unknown placeholders are left as written. Substituted values are never
    /// scanned again, so a value containing `{{...}}` comes out verbatim.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                // Unterminated: keep the rest as written.
                result.push_str(&rest[open..]);
                return result;
            };
            let name = &after_open[..close];
            match self.variables.get(name) {
                Some(value) => result.push_str(value),
                None => result.push_str(&rest[open..open + 2 + close + 2]),
            }
            rest = &after_open[close + 2..];
        }

        result.push_str(rest);
        result
    }
}
