//! Resource-pack JSON: models, blockstates and the localization table.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::domain::compatibility::DEFAULT_LOCALE;

/// Directory holding every asset of `mod_id`, relative to the project root.
pub fn assets_root(mod_id: &str) -> String {
    format!("src/main/resources/assets/{mod_id}")
}

/// Flat-textured item model.
pub fn item_model(texture_reference: &str) -> Value {
    json!({
        "parent": "minecraft:item/generated",
        "textures": {
            "layer0": texture_reference
        }
    })
}

/// Same texture on all six faces.
pub fn block_model(texture_reference: &str) -> Value {
    json!({
        "parent": "minecraft:block/cube_all",
        "textures": {
            "all": texture_reference
        }
    })
}

/// Inventory model of a block: renders the block model.
pub fn block_item_model(mod_id: &str, block_id: &str) -> Value {
    json!({
        "parent": format!("{mod_id}:block/{block_id}")
    })
}

/// Single-variant blockstate.
pub fn blockstate(mod_id: &str, block_id: &str) -> Value {
    json!({
        "variants": {
            "": { "model": format!("{mod_id}:block/{block_id}") }
        }
    })
}

/// Translation key → display name, serialized with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangTable {
    entries: BTreeMap<String, String>,
}

impl LangTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// `lang/en_us.json`, relative to the assets root.
    pub fn file_name() -> String {
        format!("lang/{DEFAULT_LOCALE}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_model_points_layer0_at_texture() {
        let model = item_model("examplemod:item/example_item");
        assert_eq!(model["parent"], "minecraft:item/generated");
        assert_eq!(model["textures"]["layer0"], "examplemod:item/example_item");
    }

    #[test]
    fn block_models_chain_to_block() {
        assert_eq!(
            block_model("gems:block/ruby_block")["textures"]["all"],
            "gems:block/ruby_block"
        );
        assert_eq!(block_item_model("gems", "ruby")["parent"], "gems:block/ruby");
        assert_eq!(
            blockstate("gems", "ruby")["variants"][""]["model"],
            "gems:block/ruby"
        );
    }

    #[test]
    fn lang_table_sorts_keys() {
        let mut lang = LangTable::new();
        lang.insert("item.m.zeta", "Zeta");
        lang.insert("block.m.alpha", "Alpha");
        let keys: Vec<_> = lang.entries().keys().map(String::as_str).collect();
        assert_eq!(keys, ["block.m.alpha", "item.m.zeta"]);
        assert_eq!(LangTable::file_name(), "lang/en_us.json");
    }
}
