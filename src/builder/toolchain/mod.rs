//! Toolchain abstraction for building the binding module.
//!
//! The binding module is a single C translation unit compiled to a
//! position-independent object and linked into a shared module against
//! the prebuilt QuEST library.
//!
//! Toolchain detection priority:
//! 1. `generator.cc` from the configuration files
//! 2. The `CC` environment variable
//! 3. Auto-detection (searching PATH for cc, gcc, clang)

use std::path::{Path, PathBuf};

mod detect;
mod gcc;

pub use detect::detect_toolchain;
pub use gcc::GccToolchain;

/// A command to execute, with program and arguments.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The program to run (e.g., "gcc")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }
}

/// Input for a compile step.
#[derive(Debug, Clone)]
pub struct CompileInput {
    /// Source file to compile
    pub source: PathBuf,
    /// Output object file
    pub output: PathBuf,
    /// Include directories
    pub include_dirs: Vec<PathBuf>,
    /// Additional compiler flags
    pub cflags: Vec<String>,
}

/// Input for a shared link step.
#[derive(Debug, Clone)]
pub struct LinkInput {
    /// Object files to link
    pub objects: Vec<PathBuf>,
    /// Output shared module
    pub output: PathBuf,
    /// Library search paths
    pub lib_dirs: Vec<PathBuf>,
    /// Libraries to link (without -l prefix)
    pub libs: Vec<String>,
    /// Additional linker flags, passed through unmodified
    pub ldflags: Vec<String>,
}

/// The family of a toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainPlatform {
    /// GCC (GNU Compiler Collection)
    Gcc,
    /// Clang/LLVM
    Clang,
    /// Apple Clang (macOS)
    AppleClang,
}

impl ToolchainPlatform {
    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainPlatform::Gcc => "gcc",
            ToolchainPlatform::Clang => "clang",
            ToolchainPlatform::AppleClang => "apple-clang",
        }
    }
}

/// Trait for toolchain implementations.
///
/// Each toolchain knows how to generate commands for its specific compiler.
pub trait Toolchain: Send + Sync {
    /// Get the toolchain platform.
    fn platform(&self) -> ToolchainPlatform;

    /// Get the C compiler path.
    fn compiler_path(&self) -> &Path;

    /// Generate a command compiling one C source to a position-independent object.
    fn compile_command(&self, input: &CompileInput) -> CommandSpec;

    /// Generate a link command for a shared module.
    fn link_shared_command(&self, input: &LinkInput) -> CommandSpec;

    /// Get the object file extension.
    fn object_extension(&self) -> &str {
        "o"
    }
}
