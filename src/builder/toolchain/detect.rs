//! Toolchain detection functions.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{GccToolchain, Toolchain, ToolchainPlatform};
use crate::util::process::{find_c_compiler, find_executable};

/// Detect the C toolchain used to build the binding module.
///
/// A configured compiler wins, then `CC`, then the first of
/// cc, gcc, clang found in PATH.
pub fn detect_toolchain(configured_cc: Option<&Path>) -> Result<Box<dyn Toolchain>> {
    if let Some(cc) = configured_cc {
        if let Some(path) = resolve_configured(cc) {
            let family = detect_compiler_family(&path);
            tracing::info!(
                "Using configured compiler {} ({})",
                path.display(),
                family.as_str()
            );
            return Ok(Box::new(GccToolchain::new(path, family)));
        }
        tracing::warn!("Configured C compiler not found: {}", cc.display());
    }

    if let Some(cc) = find_c_compiler() {
        let family = detect_compiler_family(&cc);
        tracing::debug!("Detected compiler {} ({})", cc.display(), family.as_str());
        return Ok(Box::new(GccToolchain::new(cc, family)));
    }

    bail!(
        "no C compiler found\n\
         \n\
         Building the binding module requires a C compiler (gcc or clang).\n\
         Set the CC environment variable, set `generator.cc` in .questbind/config.toml,\n\
         or install a compiler."
    )
}

fn resolve_configured(cc: &Path) -> Option<PathBuf> {
    if cc.exists() {
        Some(cc.to_path_buf())
    } else {
        find_executable(cc)
    }
}

/// Detect the compiler family from the binary name, falling back to `--version`.
fn detect_compiler_family(cc: &Path) -> ToolchainPlatform {
    let name = cc
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();

    if name.contains("gcc") {
        return ToolchainPlatform::Gcc;
    }

    let version = std::process::Command::new(cc)
        .arg("--version")
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).to_lowercase())
        .unwrap_or_default();

    family_from_version(&name, &version)
}

fn family_from_version(name: &str, version: &str) -> ToolchainPlatform {
    if version.contains("apple") && (version.contains("clang") || name.contains("clang")) {
        ToolchainPlatform::AppleClang
    } else if version.contains("clang") || name.contains("clang") {
        ToolchainPlatform::Clang
    } else {
        ToolchainPlatform::Gcc
    }
}
