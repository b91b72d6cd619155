//! Mod configuration entity.
//!
//! A [`ModConfiguration`] is immutable once built. The builder fills in every
//! optional field from the name and id, and checks the target version against
//! the supported set before anything else can see it.

use std::collections::BTreeMap;

use crate::domain::{
    compatibility::{self, DEFAULT_PLATFORM_VERSION},
    error::DomainError,
    value_objects::PlatformVersion,
};

/// Metadata describing one mod project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModConfiguration {
    mod_name: String,
    mod_id: String,
    version: String,
    description: String,
    target_platform_version: PlatformVersion,
    authors: Vec<String>,
    group: String,
    contact: BTreeMap<String, String>,
    license: String,
}

impl ModConfiguration {
    /// Start building a configuration for `mod_name` / `mod_id`.
    pub fn builder(
        mod_name: impl Into<String>,
        mod_id: impl Into<String>,
    ) -> ModConfigurationBuilder {
        ModConfigurationBuilder::new(mod_name, mod_id)
    }

    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }

    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_platform_version(&self) -> &PlatformVersion {
        &self.target_platform_version
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn contact(&self) -> &BTreeMap<String, String> {
        &self.contact
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// Java class name of the entry point: `examplemod` → `Examplemod`.
    pub fn entrypoint_class(&self) -> String {
        let mut chars = self.mod_id.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Fully-qualified entry point: `examplemod.Examplemod`.
    pub fn entrypoint(&self) -> String {
        format!("{}.{}", self.mod_id, self.entrypoint_class())
    }
}

/// Builder for [`ModConfiguration`].
#[derive(Debug, Clone)]
pub struct ModConfigurationBuilder {
    mod_name: String,
    mod_id: String,
    version: Option<String>,
    description: Option<String>,
    platform_version: Option<String>,
    authors: Option<Vec<String>>,
    group: Option<String>,
    contact: Option<BTreeMap<String, String>>,
    license: Option<String>,
}

impl ModConfigurationBuilder {
    fn new(mod_name: impl Into<String>, mod_id: impl Into<String>) -> Self {
        Self {
            mod_name: mod_name.into(),
            mod_id: mod_id.into(),
            version: None,
            description: None,
            platform_version: None,
            authors: None,
            group: None,
            contact: None,
            license: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Target Minecraft version. Defaults to `1.19.2`.
    pub fn platform_version(mut self, version: impl Into<String>) -> Self {
        self.platform_version = Some(version.into());
        self
    }

    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Add one contact channel. The first call replaces the default homepage.
    pub fn contact(mut self, channel: impl Into<String>, url: impl Into<String>) -> Self {
        self.contact
            .get_or_insert_with(BTreeMap::new)
            .insert(channel.into(), url.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingRequiredField`] if the name or id is blank
    /// - [`DomainError::UnsupportedVersion`] if the target version is not one
    ///   of [`compatibility::VALID_VERSIONS`], spelled exactly
    pub fn build(self) -> Result<ModConfiguration, DomainError> {
        if self.mod_name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if self.mod_id.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "id" });
        }

        let raw_version = self
            .platform_version
            .unwrap_or_else(|| DEFAULT_PLATFORM_VERSION.to_string());
        if !compatibility::is_supported(&raw_version) {
            return Err(DomainError::UnsupportedVersion {
                version: raw_version,
            });
        }
        let target_platform_version = PlatformVersion::parse(raw_version)?;

        let mod_id = self.mod_id;
        let authors = self
            .authors
            .unwrap_or_else(|| vec![self.mod_name.clone()]);
        let contact = self.contact.unwrap_or_else(|| {
            BTreeMap::from([(
                "homepage".to_string(),
                format!("https://modrinth.com/mod/{mod_id}"),
            )])
        });

        Ok(ModConfiguration {
            group: self.group.unwrap_or_else(|| mod_id.clone()),
            mod_name: self.mod_name,
            version: self.version.unwrap_or_else(|| "1.0.0".to_string()),
            description: self.description.unwrap_or_default(),
            target_platform_version,
            authors,
            contact,
            license: self.license.unwrap_or_else(|| "MIT".to_string()),
            mod_id,
        })
    }
}
