//! Configuration file support for questbind.
//!
//! Two configuration file locations are read:
//! - Global: `~/.questbind/config.toml` - User-wide defaults
//! - Project: `.questbind/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the configuration directory, both global and per project.
pub const CONFIG_DIR_NAME: &str = ".questbind";

/// questbind configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the QuEST sources and library live
    pub layout: LayoutConfig,

    /// Binding module settings
    pub generator: GeneratorConfig,
}

/// Path overrides for the QuEST layout. Relative paths are resolved
/// against the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory containing the prebuilt shared library
    pub lib_dir: Option<PathBuf>,

    /// QuEST source root (the directory containing `include/`)
    pub quest_dir: Option<PathBuf>,

    /// Public header to transform
    pub header: Option<PathBuf>,
}

/// Binding module generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the generated module (defaults to `_quest`)
    pub module_name: Option<String>,

    /// Output directory for the generated module
    pub out_dir: Option<PathBuf>,

    /// C compiler used to build the module
    pub cc: Option<PathBuf>,

    /// Extra linker arguments, replacing the default rpath argument
    pub extra_link_args: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't
    /// exist or can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.layout.lib_dir.is_some() {
            self.layout.lib_dir = other.layout.lib_dir;
        }
        if other.layout.quest_dir.is_some() {
            self.layout.quest_dir = other.layout.quest_dir;
        }
        if other.layout.header.is_some() {
            self.layout.header = other.layout.header;
        }

        if other.generator.module_name.is_some() {
            self.generator.module_name = other.generator.module_name;
        }
        if other.generator.out_dir.is_some() {
            self.generator.out_dir = other.generator.out_dir;
        }
        if other.generator.cc.is_some() {
            self.generator.cc = other.generator.cc;
        }
        if other.generator.extra_link_args.is_some() {
            self.generator.extra_link_args = other.generator.extra_link_args;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.questbind/config.toml)
/// 2. Global config (~/.questbind/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global questbind config directory (~/.questbind).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME))
}

/// Get the global config path (~/.questbind/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.questbind/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR_NAME).join("config.toml")
}
