//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MODSMITH__DEFAULTS__OUTPUT_DIR=out`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)
//!
//! A config file that does not exist yet is not an error; `init` and
//! `config set` create it.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix for environment overrides. Nested keys use `__`.
const ENV_PREFIX: &str = "MODSMITH";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `compile`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Where `compile` writes when `--output` is not given.
    pub output_dir: PathBuf,
    /// License for scripts that do not declare one.
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                output_dir: PathBuf::from("build_mod"),
                license: "MIT".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

/// Every key `config get`/`config set` understands.
pub const KEYS: [&str; 4] = [
    "defaults.output_dir",
    "defaults.license",
    "output.no_color",
    "output.format",
];

const FORMATS: [&str; 4] = ["auto", "human", "plain", "json"];

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        Self::layered(&path, true)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Defaults overlaid with the file only, ignoring the environment.
    ///
    /// `config set` edits this view so environment overrides are never
    /// persisted by accident.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, false)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))
    }

    fn layered(path: &Path, with_env: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(false));

        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !FORMATS.contains(&self.output.format.to_ascii_lowercase().as_str()) {
            bail!(
                "output.format must be one of {}, got '{}'",
                FORMATS.join(", "),
                self.output.format
            );
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "modsmith", "modsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".modsmith.toml"))
    }

    /// `--config` if given, otherwise [`Self::config_path`].
    pub fn resolve_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Value of a dotted key, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.output_dir" => Some(self.defaults.output_dir.display().to_string()),
            "defaults.license" => Some(self.defaults.license.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a dotted key from its text form.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "defaults.output_dir" => self.defaults.output_dir = PathBuf::from(value),
            "defaults.license" => self.defaults.license = value.to_string(),
            "output.no_color" => {
                self.output.no_color = value
                    .parse::<bool>()
                    .with_context(|| format!("output.no_color expects true or false, got '{value}'"))?;
            }
            "output.format" => {
                let previous = std::mem::replace(&mut self.output.format, value.to_string());
                if let Err(e) = self.validate() {
                    self.output.format = previous;
                    return Err(e);
                }
            }
            _ => bail!("Unknown config key '{key}' (known keys: {})", KEYS.join(", ")),
        }
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config to '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.output_dir, PathBuf::from("build_mod"));
        assert_eq!(cfg.defaults.license, "MIT");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_file(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nlicense = \"Apache-2.0\"\n").unwrap();

        let cfg = AppConfig::load_file(&path).unwrap();
        assert_eq!(cfg.defaults.license, "Apache-2.0");
        assert_eq!(cfg.defaults.output_dir, PathBuf::from("build_mod"));
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[defaults\n").unwrap();
        assert!(AppConfig::load_file(&path).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();
        assert!(AppConfig::load_file(&path).is_err());
    }

    #[test]
    fn save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let mut cfg = AppConfig::default();
        cfg.set("defaults.output_dir", "out").unwrap();
        cfg.set("output.no_color", "true").unwrap();
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load_file(&path).unwrap(), cfg);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.license").as_deref(), Some("MIT"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("output.no_color", "maybe").is_err());
        assert!(cfg.set("output.format", "xml").is_err());
        assert_eq!(cfg.output.format, "auto");
        assert!(cfg.set("defaults.lang", "rust").is_err());
    }

    #[test]
    fn every_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_some(), "{key} is not readable");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
