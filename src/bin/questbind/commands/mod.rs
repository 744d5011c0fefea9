//! Command implementations

pub mod build;
pub mod cdef;
pub mod precision;

use std::path::PathBuf;

use anyhow::{Context, Result};
use questbind::core::QuestLayout;
use questbind::util::config::{global_config_path, load_config, project_config_path, Config};
use questbind::util::fs::normalize_path;

/// A project root with its merged configuration and resolved layout.
pub struct Project {
    pub config: Config,
    pub layout: QuestLayout,
}

impl Project {
    /// Load configuration (global + project) for `root` and resolve the layout.
    pub fn load(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };
        let root = normalize_path(&root);

        let config = load_config(global_config_path().as_deref(), &project_config_path(&root));
        let layout = QuestLayout::new(&root).apply_config(&config.layout);

        tracing::debug!("Project root: {}", root.display());

        Ok(Project { config, layout })
    }
}
