//! Host platform selection for shared library file names.

use std::fmt;

/// Host operating system family, as far as library naming is concerned.
///
/// Only Darwin is told apart. Every other OS name (Linux, the BSDs,
/// Windows) falls back to [`HostPlatform::Other`] and gets the ELF-style
/// `.so` suffix, which is wrong on Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    /// macOS and other Darwin systems
    Darwin,
    /// Any other reported OS
    Other,
}

impl HostPlatform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name to a platform.
    ///
    /// Accepts the `uname -s` spelling (`Darwin`) and Rust's
    /// `std::env::consts::OS` spelling (`macos`).
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "Darwin" | "macos" => HostPlatform::Darwin,
            _ => HostPlatform::Other,
        }
    }

    /// Suffix of shared libraries on this platform.
    pub fn shared_library_suffix(&self) -> &'static str {
        match self {
            HostPlatform::Darwin => "dylib",
            HostPlatform::Other => "so",
        }
    }

    /// File name of a shared library, e.g. `libQuEST.so`.
    pub fn shared_library_file(&self, name: &str) -> String {
        format!("lib{}.{}", name, self.shared_library_suffix())
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::Darwin => write!(f, "darwin"),
            HostPlatform::Other => write!(f, "other"),
        }
    }
}
