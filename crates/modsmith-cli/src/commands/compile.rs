//! Implementation of the `modsmith compile` command.
//!
//! Responsibility: load the mod script, pick the output directory, and hand
//! both to the core renderer. No business logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use modsmith_adapters::{LocalFilesystem, ModScript, ModScriptLoader};
use modsmith_core::{
    application::{ApplicationError, ProjectRenderer},
    domain::{FsEntry, ProjectStructure},
    error::ModsmithError,
};

use crate::{
    cli::{CompileArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `modsmith compile` command.
///
/// 1. Load the script (unsupported versions fail here, before any write)
/// 2. Resolve the output directory: `--output`, else `defaults.output_dir`
/// 3. Dry run: print the plan and stop
/// 4. Otherwise render through the local filesystem
#[instrument(skip_all, fields(script = %args.script.display()))]
pub fn execute(args: CompileArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let script = ModScriptLoader::new()
        .with_default_license(config.defaults.license.clone())
        .load(&args.script)?;

    let output_dir = args
        .output
        .unwrap_or_else(|| config.defaults.output_dir.clone());
    debug!(output = %output_dir.display(), dry_run = args.dry_run, "Output resolved");

    let renderer = ProjectRenderer::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let structure = renderer.plan(&script.config, &script.blocks, &script.items, &output_dir)?;
        ensure_sources_exist(&structure)?;
        return show_plan(&structure, &output);
    }

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Compiling '{}' for Minecraft {}...",
            script.config.mod_name(),
            script.config.target_platform_version()
        ))?;
    }

    renderer.render(&script.config, &script.blocks, &script.items, &output_dir)?;
    info!(mod_id = %script.config.mod_id(), "Compile completed");

    show_summary(&script, &renderer, &output_dir, &output)
}

/// The dry run must fail the same way a real run would.
fn ensure_sources_exist(structure: &ProjectStructure) -> CliResult<()> {
    for copy in structure.copies() {
        if !copy.source.exists() {
            let missing = ApplicationError::TextureNotFound {
                path: copy.source.clone(),
            };
            return Err(ModsmithError::from(missing).into());
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct PlannedEntry<'a> {
    kind: &'static str,
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<usize>,
}

impl<'a> From<&'a FsEntry> for PlannedEntry<'a> {
    fn from(entry: &'a FsEntry) -> Self {
        let (kind, source, bytes) = match entry {
            FsEntry::Directory(_) => ("dir", None, None),
            FsEntry::File(f) => ("file", None, Some(f.size())),
            FsEntry::Binary(b) => ("file", None, Some(b.bytes.len())),
            FsEntry::Copy(c) => ("copy", Some(c.source.as_path()), None),
        };
        Self {
            kind,
            path: entry.path(),
            source,
            bytes,
        }
    }
}

fn show_plan(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    let entries: Vec<PlannedEntry<'_>> = structure.entries().iter().map(Into::into).collect();

    if output.format() == OutputFormat::Json {
        output.json(&entries)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} entries under {}",
        entries.len(),
        structure.root().display()
    ))?;
    for entry in &entries {
        let line = match (entry.source, entry.bytes) {
            (Some(source), _) => format!(
                "  {:<5} {}  <- {}",
                entry.kind,
                entry.path.display(),
                source.display()
            ),
            (None, Some(bytes)) => {
                format!("  {:<5} {}  ({bytes} bytes)", entry.kind, entry.path.display())
            }
            (None, None) => format!("  {:<5} {}", entry.kind, entry.path.display()),
        };
        output.print(&line)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CompileSummary<'a> {
    mod_id: &'a str,
    minecraft: &'a str,
    output: &'a Path,
    java_min: u32,
    java_recommended: u32,
}

fn show_summary(
    script: &ModScript,
    renderer: &ProjectRenderer,
    output_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let java = renderer
        .resolver()
        .resolve_required_toolchain(script.config.target_platform_version());

    if output.format() == OutputFormat::Json {
        output.json(&CompileSummary {
            mod_id: script.config.mod_id(),
            minecraft: script.config.target_platform_version().as_str(),
            output: output_dir,
            java_min: java.min,
            java_recommended: java.recommended,
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Mod '{}' generated at {}",
        script.config.mod_id(),
        output_dir.display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", output_dir.display()))?;
    output.print(&format!(
        "  gradle build   # needs Java {}+ (recommended {})",
        java.min, java.recommended
    ))?;
    Ok(())
}
