//! Project Renderer - main application orchestrator.
//!
//! Rendering runs in two phases:
//! 1. `plan`: resolve versions and build an ordered [`ProjectStructure`]
//!    (pure, no I/O)
//! 2. `materialize`: apply the plan through the [`Filesystem`] port
//!
//! There is no rollback. A failure part-way through leaves whatever was
//! already written in place.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainValidator as validator, EntityDefinition, EntityKind, FsEntry, ModConfiguration,
        ProjectStructure, VersionResolver,
        artifacts::{
            self, FabricManifest, LangTable, PLACEHOLDER_PNG, RenderContext, assets, gradle, java,
            manifest::MANIFEST_PATH,
        },
    },
    error::ModsmithResult,
};

/// Renders a Fabric mod project from a configuration and entity lists.
pub struct ProjectRenderer {
    filesystem: Box<dyn Filesystem>,
    resolver: VersionResolver,
}

impl ProjectRenderer {
    /// Create a renderer over the built-in compatibility tables.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modsmith_core::application::{ProjectRenderer, ports::Filesystem};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let renderer = ProjectRenderer::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            resolver: VersionResolver::new(),
        }
    }

    /// Replace the version resolver.
    pub fn with_resolver(mut self, resolver: VersionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    /// Plan and write the whole project under `output_directory`.
    #[instrument(
        skip_all,
        fields(
            mod_id = %config.mod_id(),
            minecraft = %config.target_platform_version(),
            output = %output_directory.as_ref().display()
        )
    )]
    pub fn render(
        &self,
        config: &ModConfiguration,
        blocks: &[EntityDefinition],
        items: &[EntityDefinition],
        output_directory: impl AsRef<Path>,
    ) -> ModsmithResult<()> {
        info!(
            blocks = blocks.len(),
            items = items.len(),
            "Rendering {}",
            config.mod_name()
        );

        let structure = self.plan(config, blocks, items, output_directory)?;
        self.materialize(&structure)?;

        info!(entries = structure.entry_count(), "Render completed");
        Ok(())
    }

    /// Build the write plan without touching the filesystem.
    ///
    /// Entries come out in write order: directories, Gradle files, manifest
    /// and icon, item artifacts, the localization table, block artifacts,
    /// and finally the entry point source.
    pub fn plan(
        &self,
        config: &ModConfiguration,
        blocks: &[EntityDefinition],
        items: &[EntityDefinition],
        output_directory: impl AsRef<Path>,
    ) -> ModsmithResult<ProjectStructure> {
        validator::validate_entity_kinds(blocks, EntityKind::Block)?;
        validator::validate_entity_kinds(items, EntityKind::Item)?;

        let bundle = self.resolver.resolve(config.target_platform_version())?;
        debug!(
            fabric_api = bundle.fabric_api_version,
            loom = bundle.loom_version,
            java = %bundle.java,
            "Resolved dependencies"
        );

        let mod_id = config.mod_id();
        let assets_root = assets::assets_root(mod_id);
        let mut structure = ProjectStructure::new(output_directory.as_ref());

        // 1. Directory tree
        structure.add_directory(format!("src/main/java/{mod_id}"));
        structure.add_directory("src/main/resources");
        structure.add_directory("gradle/wrapper");

        // 2. Build files and manifest
        let ctx = RenderContext::for_project(config, &bundle);
        for (path, content) in gradle::render_all(&ctx) {
            structure.add_file(path, content);
        }

        let manifest = FabricManifest::new(config, &bundle);
        structure.add_file(
            MANIFEST_PATH,
            artifacts::to_pretty_json(&manifest, "fabric.mod.json")?,
        );
        structure.add_binary(
            format!("src/main/resources/{}", manifest.icon),
            PLACEHOLDER_PNG.to_vec(),
        );

        let mut lang = LangTable::new();
        for entity in items.iter().chain(blocks) {
            lang.insert(entity.translation_key(mod_id), entity.display_name());
        }

        // 3. Items
        for item in items {
            let model = assets::item_model(&item.texture_reference(mod_id));
            structure.add_file(
                format!("{assets_root}/models/item/{}.json", item.internal_id()),
                artifacts::to_pretty_json(&model, "item model")?,
            );
            add_texture_copy(&mut structure, &assets_root, item);
        }

        // 4. Localization, once every item artifact is planned
        if !lang.is_empty() {
            structure.add_file(
                format!("{assets_root}/{}", LangTable::file_name()),
                artifacts::to_pretty_json(lang.entries(), "localization table")?,
            );
        }

        // 5. Blocks
        for block in blocks {
            let id = block.internal_id();
            add_texture_copy(&mut structure, &assets_root, block);
            structure.add_file(
                format!("{assets_root}/blockstates/{id}.json"),
                artifacts::to_pretty_json(&assets::blockstate(mod_id, id), "blockstate")?,
            );
            structure.add_file(
                format!("{assets_root}/models/block/{id}.json"),
                artifacts::to_pretty_json(
                    &assets::block_model(&block.texture_reference(mod_id)),
                    "block model",
                )?,
            );
            structure.add_file(
                format!("{assets_root}/models/item/{id}.json"),
                artifacts::to_pretty_json(&assets::block_item_model(mod_id, id), "item model")?,
            );
        }

        // 6. Entry point
        structure.add_file(
            java::entrypoint_path(config),
            java::entrypoint_source(config, blocks, items),
        );

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Apply `structure` in order.
    ///
    /// Parent directories are created on demand, so a directory only exists
    /// if some entry lives in it. Copy sources are checked right before each
    /// copy and a missing one aborts the run.
    pub fn materialize(&self, structure: &ProjectStructure) -> ModsmithResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    self.ensure_parent(&path)?;
                    self.filesystem.write_file(&path, file.content.as_bytes())?;
                }
                FsEntry::Binary(binary) => {
                    let path = root.join(&binary.path);
                    self.ensure_parent(&path)?;
                    self.filesystem.write_file(&path, &binary.bytes)?;
                }
                FsEntry::Copy(copy) => {
                    if !self.filesystem.exists(&copy.source) {
                        return Err(ApplicationError::TextureNotFound {
                            path: copy.source.clone(),
                        }
                        .into());
                    }
                    let path = root.join(&copy.destination);
                    self.ensure_parent(&path)?;
                    self.filesystem.copy_file(&copy.source, &path)?;
                }
            }
            debug!(path = %entry.path().display(), "Wrote entry");
        }

        Ok(())
    }

    fn ensure_parent(&self, path: &Path) -> ModsmithResult<()> {
        match path.parent() {
            Some(parent) => self.filesystem.create_dir_all(parent),
            None => Ok(()),
        }
    }
}

/// Plan a texture copy, skipping it if the identical copy is already planned.
///
/// Entities may share a texture file; two different sources landing on the
/// same destination are left for validation to reject.
fn add_texture_copy(structure: &mut ProjectStructure, assets_root: &str, entity: &EntityDefinition) {
    let destination = Path::new(assets_root).join(entity.texture_path());
    let already_planned = structure
        .copies()
        .any(|c| c.source == entity.texture_file() && c.destination == destination);
    if !already_planned {
        structure.add_copy(entity.texture_file(), destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{DomainError, resolver::DependencyBundle},
        error::ModsmithError,
    };
    use std::path::PathBuf;

    fn example_config() -> ModConfiguration {
        ModConfiguration::builder("Example Mod", "examplemod")
            .platform_version("1.21.4")
            .build()
            .unwrap()
    }

    fn example_item() -> EntityDefinition {
        EntityDefinition::item("my_item", "My Item", "example.png", "misc")
    }

    /// A mock that must never be touched.
    fn untouched() -> ProjectRenderer {
        ProjectRenderer::new(Box::new(MockFilesystem::new()))
    }

    fn json(structure: &ProjectStructure, path: &str) -> serde_json::Value {
        let text = structure
            .file(path)
            .unwrap_or_else(|| panic!("{path} not planned"));
        serde_json::from_str(text).unwrap()
    }

    // ── planning ──────────────────────────────────────────────────────────────

    #[test]
    fn example_mod_scenario() {
        let structure = untouched()
            .plan(&example_config(), &[], &[example_item()], "build_mod")
            .unwrap();

        let manifest = json(&structure, "src/main/resources/fabric.mod.json");
        assert_eq!(manifest["id"], "examplemod");
        assert_eq!(manifest["depends"]["minecraft"], ">=1.21.4");
        assert_eq!(manifest["entrypoints"]["main"][0], "examplemod.Examplemod");

        let model = json(
            &structure,
            "src/main/resources/assets/examplemod/models/item/my_item.json",
        );
        assert_eq!(model["textures"]["layer0"], "examplemod:item/example_item");

        let lang = json(
            &structure,
            "src/main/resources/assets/examplemod/lang/en_us.json",
        );
        assert_eq!(lang["item.examplemod.my_item"], "My Item");

        let copy = structure.copies().next().unwrap();
        assert_eq!(copy.source, PathBuf::from("example.png"));
        assert_eq!(
            copy.destination,
            PathBuf::from("src/main/resources/assets/examplemod/textures/item/example_item.png")
        );
        assert!(
            structure
                .file("src/main/java/examplemod/Examplemod.java")
                .unwrap()
                .contains("Registering item: My Item (my_item)")
        );
    }

    #[test]
    fn plan_is_deterministic() {
        let renderer = untouched();
        let blocks = [EntityDefinition::block("ruby", "Ruby", "ruby.png", "misc")];
        let items = [example_item()];
        let a = renderer
            .plan(&example_config(), &blocks, &items, "out")
            .unwrap();
        let b = renderer
            .plan(&example_config(), &blocks, &items, "out")
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn item_artifacts_precede_lang_and_blocks() {
        let blocks = [EntityDefinition::block("ruby", "Ruby", "ruby.png", "misc")];
        let structure = untouched()
            .plan(&example_config(), &blocks, &[example_item()], "out")
            .unwrap();

        let position = |suffix: &str| {
            structure
                .entries()
                .iter()
                .position(|e| e.path().ends_with(suffix))
                .unwrap_or_else(|| panic!("{suffix} not planned"))
        };
        let item_texture = position("textures/item/example_item.png");
        let lang = position("lang/en_us.json");
        let block_texture = position("textures/block/ruby_block.png");
        let entrypoint = position("Examplemod.java");

        assert!(item_texture < lang);
        assert!(lang < block_texture);
        assert!(block_texture < entrypoint);
    }

    #[test]
    fn blocks_get_models_blockstates_and_lang() {
        let blocks = [EntityDefinition::block("ruby", "Ruby Block", "ruby.png", "misc")];
        let structure = untouched()
            .plan(&example_config(), &blocks, &[], "out")
            .unwrap();
        let root = "src/main/resources/assets/examplemod";

        assert_eq!(
            json(&structure, &format!("{root}/blockstates/ruby.json"))["variants"][""]["model"],
            "examplemod:block/ruby"
        );
        assert_eq!(
            json(&structure, &format!("{root}/models/block/ruby.json"))["textures"]["all"],
            "examplemod:block/ruby_block"
        );
        assert_eq!(
            json(&structure, &format!("{root}/models/item/ruby.json"))["parent"],
            "examplemod:block/ruby"
        );
        assert_eq!(
            json(&structure, &format!("{root}/lang/en_us.json"))["block.examplemod.ruby"],
            "Ruby Block"
        );
    }

    #[test]
    fn no_entities_means_no_lang_and_no_textures() {
        let structure = untouched()
            .plan(&example_config(), &[], &[], "out")
            .unwrap();
        assert!(structure.copies().next().is_none());
        assert!(
            structure
                .entries()
                .iter()
                .all(|e| !e.path().ends_with("lang/en_us.json"))
        );
    }

    #[test]
    fn shared_texture_is_copied_once() {
        let items = [
            EntityDefinition::item("a", "A", "shared.png", "misc"),
            EntityDefinition::item("b", "B", "shared.png", "misc"),
        ];
        let structure = untouched()
            .plan(&example_config(), &[], &items, "out")
            .unwrap();
        assert_eq!(structure.copies().count(), 1);
    }

    #[test]
    fn conflicting_texture_destinations_are_rejected() {
        let items = [
            EntityDefinition::item("a", "A", "one/gem.png", "misc"),
            EntityDefinition::item("b", "B", "two/gem.png", "misc"),
        ];
        let err = untouched()
            .plan(&example_config(), &[], &items, "out")
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Domain(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn item_listed_as_block_is_rejected() {
        let err = untouched()
            .plan(&example_config(), &[example_item()], &[], "out")
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Domain(DomainError::EntityKindMismatch { .. })
        ));
    }

    #[test]
    fn build_files_use_resolved_bundle() {
        let config = example_config();
        let structure = untouched().plan(&config, &[], &[], "out").unwrap();
        let bundle: DependencyBundle = VersionResolver::new()
            .resolve(config.target_platform_version())
            .unwrap();

        let build = structure.file("build.gradle").unwrap();
        assert!(build.contains(bundle.fabric_api_version));
        assert!(build.contains(bundle.loom_version));
        assert!(structure.file("gradle.properties").unwrap().contains("=21"));
    }

    // ── materialization ───────────────────────────────────────────────────────

    #[test]
    fn render_copies_texture_into_asset_tree() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_copy_file()
            .withf(|from, to| {
                from.as_os_str() == "example.png"
                    && to.ends_with("assets/examplemod/textures/item/example_item.png")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        ProjectRenderer::new(Box::new(fs))
            .render(&example_config(), &[], &[example_item()], "/tmp/out")
            .unwrap();
    }

    #[test]
    fn missing_item_texture_aborts_before_block_textures() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_exists()
            .returning(|path| path.as_os_str() != "missing.png");
        fs.expect_copy_file().times(0);

        let items = [EntityDefinition::item("my_item", "My Item", "missing.png", "misc")];
        let blocks = [EntityDefinition::block("ruby", "Ruby", "ruby.png", "misc")];

        let err = ProjectRenderer::new(Box::new(fs))
            .render(&example_config(), &blocks, &items, "/tmp/out")
            .unwrap_err();

        assert_eq!(
            err,
            ModsmithError::Application(ApplicationError::TextureNotFound {
                path: PathBuf::from("missing.png")
            })
        );
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn block_texture_directory_only_created_for_blocks() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|path| !path.ends_with("textures/block"))
            .returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_copy_file().returning(|_, _| Ok(()));

        ProjectRenderer::new(Box::new(fs))
            .render(&example_config(), &[], &[example_item()], "/tmp/out")
            .unwrap();
    }

    #[test]
    fn filesystem_errors_propagate() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let err = ProjectRenderer::new(Box::new(fs))
            .render(&example_config(), &[], &[], "/tmp/out")
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
