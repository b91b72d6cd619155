//! Implementation of the `modsmith versions` command.

use serde::Serialize;

use modsmith_core::{
    domain::{PlatformVersion, VersionResolver, compatibility::VALID_VERSIONS},
    error::ModsmithError,
};

use crate::{
    cli::{ListFormat, VersionsArgs},
    error::CliResult,
    output::OutputManager,
};

/// One supported Minecraft version and what it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRow {
    pub minecraft: String,
    pub fabric_api: &'static str,
    pub loom: &'static str,
    pub java_min: u32,
    pub java_recommended: u32,
}

/// Resolve every supported version, oldest first.
pub fn rows(resolver: &VersionResolver) -> CliResult<Vec<VersionRow>> {
    VALID_VERSIONS
        .iter()
        .map(|raw| -> CliResult<VersionRow> {
            let version = PlatformVersion::parse(*raw).map_err(ModsmithError::from)?;
            let bundle = resolver.resolve(&version).map_err(ModsmithError::from)?;
            Ok(VersionRow {
                minecraft: bundle.minecraft_version,
                fabric_api: bundle.fabric_api_version,
                loom: bundle.loom_version,
                java_min: bundle.java.min,
                java_recommended: bundle.java.recommended,
            })
        })
        .collect()
}

pub fn execute(args: VersionsArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows(&VersionResolver::new())?;

    match args.format {
        ListFormat::Table => {
            output.header("Supported Minecraft versions:")?;
            output.print(&format!(
                "  {:<10} {:<18} {:<8} {}",
                "MINECRAFT", "FABRIC API", "LOOM", "JAVA"
            ))?;
            for row in &rows {
                output.print(&format!(
                    "  {:<10} {:<18} {:<8} {} (recommended {})",
                    row.minecraft, row.fabric_api, row.loom, row.java_min, row.java_recommended
                ))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                output.data(&row.minecraft)?;
            }
        }

        ListFormat::Json => output.json(&rows)?,

        ListFormat::Csv => {
            output.data("minecraft,fabric_api,loom,java_min,java_recommended")?;
            for row in &rows {
                output.data(&format!(
                    "{},{},{},{},{}",
                    row.minecraft, row.fabric_api, row.loom, row.java_min, row.java_recommended
                ))?;
            }
        }
    }

    Ok(())
}
