//! Implementation of `questbind build`.
//!
//! Load library → query precision → read header → filter → substitute →
//! append supplemental declarations → hand the result to the generator.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::builder::bindings::{Cdef, CdefBuilder};
use crate::builder::generator::{
    BindingRequest, GeneratedModule, InterfaceGenerator, LinkSpec, DEFAULT_MODULE_NAME,
    ORIGIN_RPATH_ARG,
};
use crate::core::layout::{QuestLayout, DEFAULT_HEADER, LIBRARY_NAME};
use crate::core::precision::Precision;
use crate::native::{detect_precision, FixedPrecision, NativeLibrary, PrecisionProbe};
use crate::util::fs::read_lines;

/// Options for the build command.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Resolved input paths
    pub layout: QuestLayout,

    /// Name of the generated module
    pub module_name: String,

    /// Output directory for the generated module
    pub out_dir: PathBuf,

    /// Precision code to use instead of querying the library
    pub precision_override: Option<i32>,

    /// Extra linker arguments
    pub extra_link_args: Vec<String>,
}

impl BuildOptions {
    /// Default options for a layout: module `_quest`, written next to the
    /// shared library, with a `$ORIGIN` rpath.
    pub fn new(layout: QuestLayout) -> Self {
        BuildOptions {
            out_dir: layout.lib_dir.clone(),
            layout,
            module_name: DEFAULT_MODULE_NAME.to_string(),
            precision_override: None,
            extra_link_args: vec![ORIGIN_RPATH_ARG.to_string()],
        }
    }

    /// Set the module name.
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Set the output directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Use a fixed precision code instead of loading the library.
    pub fn with_precision_override(mut self, code: Option<i32>) -> Self {
        self.precision_override = code;
        self
    }

    /// Replace the extra linker arguments.
    pub fn with_extra_link_args(mut self, args: Vec<String>) -> Self {
        self.extra_link_args = args;
        self
    }
}

/// Generator inputs prepared for one build.
#[derive(Debug, Clone, Serialize)]
pub struct BindingPlan {
    /// Detected precision
    pub precision: Precision,
    /// The request for the generator
    pub request: BindingRequest,
}

/// Result of a binding build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    /// The plan that was executed
    pub plan: BindingPlan,
    /// Generated files
    pub generated: GeneratedModule,
}

/// Build the precision probe the options ask for.
pub fn open_probe(opts: &BuildOptions) -> Result<Box<dyn PrecisionProbe>> {
    match opts.precision_override {
        Some(code) => Ok(Box::new(FixedPrecision(code))),
        None => Ok(Box::new(NativeLibrary::open(opts.layout.library_path())?)),
    }
}

/// Read the header at `header` and build its declaration set.
pub fn prepare_cdef(header: &Path, precision: Precision) -> Result<Cdef> {
    let lines = read_lines(header)?;

    let cdef = CdefBuilder::new(precision)
        .header_lines(lines.iter().map(String::as_str))
        .build();

    tracing::info!(
        "Prepared {} declaration lines from {}",
        cdef.line_count(),
        header.display()
    );

    Ok(cdef)
}

/// Source snippet compiled into the module.
pub fn module_source() -> String {
    format!("#include <{}>\n", DEFAULT_HEADER)
}

/// Assemble the generator inputs.
pub fn binding_request(
    layout: &QuestLayout,
    module_name: &str,
    cdef: Cdef,
    extra_link_args: Vec<String>,
) -> BindingRequest {
    BindingRequest {
        module_name: module_name.to_string(),
        cdef: cdef.into_text(),
        source: module_source(),
        link: LinkSpec {
            libraries: vec![LIBRARY_NAME.to_string()],
            include_dirs: vec![layout.include_dir()],
            library_dirs: vec![layout.lib_dir.clone()],
        },
        extra_link_args,
    }
}

/// Query the precision and prepare the generator inputs.
pub fn plan_bindings(opts: &BuildOptions, probe: &dyn PrecisionProbe) -> Result<BindingPlan> {
    let precision = detect_precision(probe)?;
    let cdef = prepare_cdef(&opts.layout.header, precision)?;
    let request = binding_request(
        &opts.layout,
        &opts.module_name,
        cdef,
        opts.extra_link_args.clone(),
    );

    Ok(BindingPlan { precision, request })
}

/// Run the full pipeline.
pub fn build_bindings(
    opts: &BuildOptions,
    probe: &dyn PrecisionProbe,
    generator: &dyn InterfaceGenerator,
) -> Result<BuildOutcome> {
    let plan = plan_bindings(opts, probe)?;
    let generated = generator.generate(&plan.request, &opts.out_dir)?;

    Ok(BuildOutcome { plan, generated })
}
