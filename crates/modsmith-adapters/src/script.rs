//! Declarative mod-script loader.
//!
//! A mod script is a TOML file describing one mod: its metadata and the
//! blocks and items it adds. Loading a script yields everything
//! [`ProjectRenderer::render`](modsmith_core::application::ProjectRenderer::render)
//! needs.
//!
//! # Format
//!
//! ```toml
//! [mod]
//! name      = "Example Mod"
//! id        = "examplemod"
//! minecraft = "1.21.4"
//! version     = "1.0.0"            # optional
//! description = "Adds an item"     # optional
//! group       = "com.example"      # optional
//! authors     = ["Someone"]        # optional
//! license     = "MIT"              # optional
//!
//! [mod.contact]                    # optional
//! homepage = "https://example.com"
//!
//! [[items]]
//! id       = "my_item"
//! name     = "My Item"
//! texture  = "example.png"         # relative to this file
//! category = "misc"                # optional
//!
//! [[blocks]]                       # same shape as [[items]]
//! ```

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use modsmith_core::{
    application::ApplicationError,
    domain::{EntityDefinition, EntityKind, ModConfiguration},
    error::ModsmithResult,
};

const DEFAULT_CATEGORY: &str = "misc";

// ── Script types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptFile {
    #[serde(rename = "mod")]
    mod_section: ModSection,
    #[serde(default)]
    items: Vec<EntitySection>,
    #[serde(default)]
    blocks: Vec<EntitySection>,
}

/// `[mod]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModSection {
    name: String,
    id: String,
    minecraft: String,
    version: Option<String>,
    description: Option<String>,
    group: Option<String>,
    authors: Option<Vec<String>>,
    license: Option<String>,
    contact: Option<BTreeMap<String, String>>,
}

/// One `[[items]]` or `[[blocks]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntitySection {
    id: String,
    name: String,
    texture: PathBuf,
    #[serde(default = "default_category")]
    category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A loaded script: the configuration plus ordered entity lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModScript {
    pub config: ModConfiguration,
    pub blocks: Vec<EntityDefinition>,
    pub items: Vec<EntityDefinition>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads mod scripts from disk.
///
/// # Example
///
/// ```rust,no_run
/// use modsmith_adapters::ModScriptLoader;
///
/// let script = ModScriptLoader::new().load("my_mod.toml".as_ref())?;
/// println!("{} items", script.items.len());
/// # Ok::<(), modsmith_core::error::ModsmithError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModScriptLoader {
    default_license: Option<String>,
}

impl ModScriptLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// License applied when a script does not set one.
    pub fn with_default_license(mut self, license: impl Into<String>) -> Self {
        self.default_license = Some(license.into());
        self
    }

    /// Read and parse the script at `path`.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::ScriptNotFound`] if `path` does not exist
    /// - [`ApplicationError::ScriptError`] for malformed TOML or a missing
    ///   required field
    /// - a domain error if the configuration is rejected (for example an
    ///   unsupported Minecraft version)
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> ModsmithResult<ModScript> {
        let source = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::ScriptNotFound {
                path: path.to_path_buf(),
            },
            _ => ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read script: {e}"),
            },
        })?;

        self.parse(&source, path)
    }

    /// Parse script text. `origin` is the script's own path: it names the
    /// script in errors, and relative textures resolve against its directory.
    pub fn parse(&self, source: &str, origin: &Path) -> ModsmithResult<ModScript> {
        let file: ScriptFile = toml::from_str(source).map_err(|e| ApplicationError::ScriptError {
            path: origin.to_path_buf(),
            reason: e.message().to_string(),
        })?;

        let base_dir = origin.parent().unwrap_or_else(|| Path::new(""));
        let config = self.build_config(file.mod_section)?;
        let items = to_entities(file.items, EntityKind::Item, base_dir);
        let blocks = to_entities(file.blocks, EntityKind::Block, base_dir);

        debug!(
            mod_id = %config.mod_id(),
            items = items.len(),
            blocks = blocks.len(),
            "loaded mod script"
        );

        Ok(ModScript {
            config,
            blocks,
            items,
        })
    }

    fn build_config(&self, section: ModSection) -> ModsmithResult<ModConfiguration> {
        let mut builder =
            ModConfiguration::builder(section.name, section.id).platform_version(section.minecraft);

        if let Some(version) = section.version {
            builder = builder.version(version);
        }
        if let Some(description) = section.description {
            builder = builder.description(description);
        }
        if let Some(group) = section.group {
            builder = builder.group(group);
        }
        if let Some(authors) = section.authors {
            builder = builder.authors(authors);
        }
        if let Some(license) = section.license.or_else(|| self.default_license.clone()) {
            builder = builder.license(license);
        }
        for (channel, url) in section.contact.unwrap_or_default() {
            builder = builder.contact(channel, url);
        }

        Ok(builder.build()?)
    }
}

fn to_entities(
    sections: Vec<EntitySection>,
    kind: EntityKind,
    base_dir: &Path,
) -> Vec<EntityDefinition> {
    sections
        .into_iter()
        .map(|s| {
            let texture = if s.texture.is_absolute() {
                s.texture
            } else {
                base_dir.join(s.texture)
            };
            EntityDefinition::new(kind, s.id, s.name, texture, s.category)
        })
        .collect()
}
