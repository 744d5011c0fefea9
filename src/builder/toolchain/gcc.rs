//! GCC/Clang toolchain implementation.

use std::path::{Path, PathBuf};

use super::{CommandSpec, CompileInput, LinkInput, Toolchain, ToolchainPlatform};

/// GCC/Clang toolchain (Unix-like systems).
#[derive(Debug, Clone)]
pub struct GccToolchain {
    /// Path to the C compiler, also used as the linker driver
    pub cc: PathBuf,
    /// Compiler family (gcc, clang, apple-clang)
    pub family: ToolchainPlatform,
}

impl GccToolchain {
    /// Create a new GCC-style toolchain.
    pub fn new(cc: PathBuf, family: ToolchainPlatform) -> Self {
        GccToolchain { cc, family }
    }
}

impl Toolchain for GccToolchain {
    fn platform(&self) -> ToolchainPlatform {
        self.family
    }

    fn compiler_path(&self) -> &Path {
        &self.cc
    }

    fn compile_command(&self, input: &CompileInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.cc).arg("-c").arg("-fPIC");

        for dir in &input.include_dirs {
            cmd = cmd.arg(format!("-I{}", dir.display()));
        }

        cmd = cmd.args(input.cflags.iter().cloned());

        cmd.arg(input.source.display().to_string())
            .arg("-o")
            .arg(input.output.display().to_string())
    }

    fn link_shared_command(&self, input: &LinkInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.cc).arg("-shared");

        // Apple's linker rejects unresolved symbols in shared modules by default
        if self.family == ToolchainPlatform::AppleClang {
            cmd = cmd.args(["-undefined", "dynamic_lookup"]);
        }

        cmd = cmd.arg("-o").arg(input.output.display().to_string());

        for obj in &input.objects {
            cmd = cmd.arg(obj.display().to_string());
        }

        for dir in &input.lib_dirs {
            cmd = cmd.arg(format!("-L{}", dir.display()));
        }

        for lib in &input.libs {
            cmd = cmd.arg(format!("-l{}", lib));
        }

        cmd.args(input.ldflags.iter().cloned())
    }
}
