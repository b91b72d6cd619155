//! Block and item definitions.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::EntityKind;

/// Extension used when a texture file name has none.
const DEFAULT_TEXTURE_EXTENSION: &str = "png";

/// A declarative block or item.
///
/// Every derived name below is a pure function of the entity fields and the
/// owning mod id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDefinition {
    kind: EntityKind,
    internal_id: String,
    display_name: String,
    texture_file: PathBuf,
    category: String,
}

impl EntityDefinition {
    pub fn new(
        kind: EntityKind,
        internal_id: impl Into<String>,
        display_name: impl Into<String>,
        texture_file: impl Into<PathBuf>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            internal_id: internal_id.into(),
            display_name: display_name.into(),
            texture_file: texture_file.into(),
            category: category.into(),
        }
    }

    pub fn block(
        internal_id: impl Into<String>,
        display_name: impl Into<String>,
        texture_file: impl Into<PathBuf>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            EntityKind::Block,
            internal_id,
            display_name,
            texture_file,
            category,
        )
    }

    pub fn item(
        internal_id: impl Into<String>,
        display_name: impl Into<String>,
        texture_file: impl Into<PathBuf>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            EntityKind::Item,
            internal_id,
            display_name,
            texture_file,
            category,
        )
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn texture_file(&self) -> &Path {
        &self.texture_file
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// `item.examplemod.my_item`
    pub fn translation_key(&self, mod_id: &str) -> String {
        format!("{}.{}.{}", self.kind, mod_id, self.internal_id)
    }

    fn texture_stem(&self) -> String {
        self.texture_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.internal_id.clone())
    }

    /// Destination file name: `example.png` → `example_item.png`.
    pub fn texture_file_name(&self) -> String {
        let extension = self
            .texture_file
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TEXTURE_EXTENSION.to_string());
        format!("{}_{}.{}", self.texture_stem(), self.kind, extension)
    }

    /// Resource reference used by models: `examplemod:item/example_item`.
    pub fn texture_reference(&self, mod_id: &str) -> String {
        format!(
            "{}:{}/{}_{}",
            mod_id,
            self.kind,
            self.texture_stem(),
            self.kind
        )
    }

    /// Texture destination relative to `assets/<mod_id>`.
    pub fn texture_path(&self) -> PathBuf {
        Path::new("textures")
            .join(self.kind.as_str())
            .join(self.texture_file_name())
    }
}
