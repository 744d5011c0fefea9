//! On-disk layout of a QuEST checkout and its prebuilt library.

use std::path::{Path, PathBuf};

use super::platform::HostPlatform;
use crate::util::config::LayoutConfig;

/// Default directory holding the prebuilt shared library.
pub const DEFAULT_LIB_DIR: &str = "pyquest_cffi/questlib";

/// Default QuEST source root.
pub const DEFAULT_QUEST_DIR: &str = "QuEST/QuEST";

/// Default public header name, inside the include directory.
pub const DEFAULT_HEADER: &str = "QuEST.h";

/// Name of the native library, without prefix or suffix.
pub const LIBRARY_NAME: &str = "QuEST";

/// Resolved paths for one binding build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLayout {
    /// Project root all relative paths are resolved against
    pub root: PathBuf,
    /// Directory containing the shared library
    pub lib_dir: PathBuf,
    /// QuEST source root (contains `include/`)
    pub quest_dir: PathBuf,
    /// Public header
    pub header: PathBuf,
    /// Platform used to name the shared library
    pub platform: HostPlatform,
}

impl QuestLayout {
    /// Default layout under `root` for the current host.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_platform(root, HostPlatform::current())
    }

    /// Default layout under `root` for an explicit platform.
    pub fn with_platform(root: impl Into<PathBuf>, platform: HostPlatform) -> Self {
        let root = root.into();
        let quest_dir = root.join(DEFAULT_QUEST_DIR);
        QuestLayout {
            lib_dir: root.join(DEFAULT_LIB_DIR),
            header: quest_dir.join("include").join(DEFAULT_HEADER),
            quest_dir,
            root,
            platform,
        }
    }

    /// Apply configured overrides. Relative paths are resolved against the root.
    pub fn apply_config(mut self, config: &LayoutConfig) -> Self {
        if let Some(ref dir) = config.lib_dir {
            self.lib_dir = self.root.join(dir);
        }
        if let Some(ref dir) = config.quest_dir {
            self.quest_dir = self.root.join(dir);
            self.header = self.include_dir().join(DEFAULT_HEADER);
        }
        if let Some(ref header) = config.header {
            self.header = self.root.join(header);
        }
        self
    }

    /// Override the header path.
    pub fn with_header(mut self, header: impl AsRef<Path>) -> Self {
        self.header = self.root.join(header);
        self
    }

    /// Directory passed to the compiler as an include path.
    pub fn include_dir(&self) -> PathBuf {
        self.quest_dir.join("include")
    }

    /// Full path of the shared library for this platform.
    pub fn library_path(&self) -> PathBuf {
        self.lib_dir
            .join(self.platform.shared_library_file(LIBRARY_NAME))
    }
}
