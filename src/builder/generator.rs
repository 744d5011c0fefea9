//! Binding module generation.
//!
//! A [`BindingRequest`] carries everything the generator needs: the
//! cleaned declarations, a source snippet that includes the real header,
//! the link specification, and extra linker arguments. Generators pass
//! all of these through unmodified.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::toolchain::{CompileInput, LinkInput, Toolchain};
use crate::core::platform::HostPlatform;
use crate::util::fs::{ensure_dir, write_string};
use crate::util::process::ProcessBuilder;

/// Default name of the generated module.
pub const DEFAULT_MODULE_NAME: &str = "_quest";

/// Linker argument embedding a search path relative to the module itself.
pub const ORIGIN_RPATH_ARG: &str = "-Wl,-rpath,$ORIGIN";

/// Libraries and search paths the module links against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSpec {
    /// Libraries to link (without prefix or suffix)
    pub libraries: Vec<String>,
    /// Include directories for the source snippet
    pub include_dirs: Vec<PathBuf>,
    /// Library search directories
    pub library_dirs: Vec<PathBuf>,
}

/// Inputs for one binding module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRequest {
    /// Module name, used as the stem of every generated file
    pub module_name: String,
    /// Directive-free declarations
    pub cdef: String,
    /// Native source compiled into the module
    pub source: String,
    /// Link specification
    pub link: LinkSpec,
    /// Extra linker arguments
    pub extra_link_args: Vec<String>,
}

/// Files produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedModule {
    /// The loadable module
    pub module: PathBuf,
    /// The declaration file
    pub declarations: PathBuf,
    /// The native source file
    pub source: PathBuf,
}

/// A binding generator.
pub trait InterfaceGenerator {
    /// Generate the module for `request` into `out_dir`.
    fn generate(&self, request: &BindingRequest, out_dir: &Path) -> Result<GeneratedModule>;
}

/// Generator compiling the source snippet into a shared module with the
/// host C toolchain.
pub struct NativeModuleGenerator {
    toolchain: Box<dyn Toolchain>,
    platform: HostPlatform,
}

impl NativeModuleGenerator {
    /// Create a generator for the host platform.
    pub fn new(toolchain: Box<dyn Toolchain>) -> Self {
        Self::with_platform(toolchain, HostPlatform::current())
    }

    /// Create a generator for an explicit platform.
    pub fn with_platform(toolchain: Box<dyn Toolchain>, platform: HostPlatform) -> Self {
        NativeModuleGenerator {
            toolchain,
            platform,
        }
    }

    /// Paths of the files generated for `module_name` in `out_dir`.
    pub fn output_paths(&self, module_name: &str, out_dir: &Path) -> GeneratedModule {
        GeneratedModule {
            module: out_dir.join(format!(
                "{}.{}",
                module_name,
                self.platform.shared_library_suffix()
            )),
            declarations: out_dir.join(format!("{}.h", module_name)),
            source: out_dir.join(format!("{}.c", module_name)),
        }
    }
}

impl InterfaceGenerator for NativeModuleGenerator {
    fn generate(&self, request: &BindingRequest, out_dir: &Path) -> Result<GeneratedModule> {
        ensure_dir(out_dir)?;

        let generated = self.output_paths(&request.module_name, out_dir);
        let object = out_dir.join(format!(
            "{}.{}",
            request.module_name,
            self.toolchain.object_extension()
        ));

        write_string(&generated.declarations, &request.cdef)?;
        write_string(&generated.source, &request.source)?;

        let compile = CompileInput {
            source: generated.source.clone(),
            output: object.clone(),
            include_dirs: request.link.include_dirs.clone(),
            cflags: Vec::new(),
        };
        let spec = self.toolchain.compile_command(&compile);
        tracing::info!(
            "Compiling {} with {} ({})",
            generated.source.display(),
            self.toolchain.compiler_path().display(),
            self.toolchain.platform().as_str()
        );
        ProcessBuilder::from(spec)
            .exec_and_check()
            .with_context(|| format!("failed to compile {}", generated.source.display()))?;

        let link = LinkInput {
            objects: vec![object],
            output: generated.module.clone(),
            lib_dirs: request.link.library_dirs.clone(),
            libs: request.link.libraries.clone(),
            ldflags: request.extra_link_args.clone(),
        };
        let spec = self.toolchain.link_shared_command(&link);
        tracing::info!("Linking {}", generated.module.display());
        ProcessBuilder::from(spec)
            .exec_and_check()
            .with_context(|| format!("failed to link {}", generated.module.display()))?;

        Ok(generated)
    }
}
