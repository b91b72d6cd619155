//! `fabric.mod.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::ModConfiguration, resolver::DependencyBundle};

pub const MANIFEST_PATH: &str = "src/main/resources/fabric.mod.json";

/// The Fabric mod manifest. Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricManifest {
    pub schema_version: u32,
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    pub contact: BTreeMap<String, String>,
    pub license: String,
    pub icon: String,
    pub environment: String,
    pub entrypoints: Entrypoints,
    pub depends: Depends,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrypoints {
    pub main: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depends {
    pub fabricloader: String,
    #[serde(rename = "fabric-api")]
    pub fabric_api: String,
    pub minecraft: String,
    pub java: String,
}

impl FabricManifest {
    pub fn new(config: &ModConfiguration, bundle: &DependencyBundle) -> Self {
        Self {
            schema_version: 1,
            id: config.mod_id().to_string(),
            version: config.version().to_string(),
            name: config.mod_name().to_string(),
            description: config.description().to_string(),
            authors: config.authors().to_vec(),
            contact: config.contact().clone(),
            license: config.license().to_string(),
            icon: icon_path(config.mod_id()),
            environment: "*".to_string(),
            entrypoints: Entrypoints {
                main: vec![config.entrypoint()],
            },
            depends: Depends {
                fabricloader: format!(">={}", bundle.loader_version),
                fabric_api: "*".to_string(),
                minecraft: format!(">={}", bundle.minecraft_version),
                java: format!(">={}", bundle.java.min),
            },
        }
    }
}

/// Icon path as referenced from the manifest (relative to `resources`).
pub fn icon_path(mod_id: &str) -> String {
    format!("assets/{mod_id}/icon.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::VersionResolver;

    fn manifest() -> FabricManifest {
        let config = ModConfiguration::builder("Example Mod", "examplemod")
            .platform_version("1.21.4")
            .build()
            .unwrap();
        let bundle = VersionResolver::new()
            .resolve(config.target_platform_version())
            .unwrap();
        FabricManifest::new(&config, &bundle)
    }

    #[test]
    fn example_mod_manifest() {
        let m = manifest();
        assert_eq!(m.schema_version, 1);
        assert_eq!(m.id, "examplemod");
        assert_eq!(m.entrypoints.main, ["examplemod.Examplemod"]);
        assert_eq!(m.icon, "assets/examplemod/icon.png");
        assert_eq!(m.depends.fabricloader, ">=0.15.3");
        assert_eq!(m.depends.fabric_api, "*");
        assert_eq!(m.depends.minecraft, ">=1.21.4");
        assert_eq!(m.depends.java, ">=21");
    }

    #[test]
    fn serialized_key_order() {
        let json = serde_json::to_string(&manifest()).unwrap();
        let keys = [
            "\"schemaVersion\"",
            "\"id\"",
            "\"version\"",
            "\"name\"",
            "\"description\"",
            "\"authors\"",
            "\"contact\"",
            "\"license\"",
            "\"icon\"",
            "\"environment\"",
            "\"entrypoints\"",
            "\"depends\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(k).unwrap_or_else(|| panic!("{k} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"fabric-api\":\"*\""));
    }
}
