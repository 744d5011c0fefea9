//! Loading the prebuilt QuEST library and querying its precision.

use std::os::raw::c_int;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use libloading::{Library, Symbol};

use crate::core::precision::Precision;

/// Name of the exported precision query.
pub const PRECISION_SYMBOL: &str = "getQuEST_PREC";

/// Something that can report the library's precision code.
pub trait PrecisionProbe {
    /// Return the raw precision code.
    fn precision_code(&self) -> Result<i32>;

    /// Short description used in log messages.
    fn describe(&self) -> String;
}

/// A loaded QuEST shared library.
#[derive(Debug)]
pub struct NativeLibrary {
    path: PathBuf,
    library: Library,
}

impl NativeLibrary {
    /// Load the shared library at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // SAFETY: loading runs the library's initialisers. QuEST's only
        // initialisers set up its own static state.
        let library = unsafe { Library::new(path) }
            .with_context(|| format!("failed to load native library: {}", path.display()))?;

        tracing::debug!("Loaded native library {}", path.display());

        Ok(NativeLibrary {
            path: path.to_path_buf(),
            library,
        })
    }
}

impl PrecisionProbe for NativeLibrary {
    fn precision_code(&self) -> Result<i32> {
        // SAFETY: getQuEST_PREC is declared in QuEST as `int getQuEST_PREC(void)`.
        let code = unsafe {
            let query: Symbol<'_, unsafe extern "C" fn() -> c_int> = self
                .library
                .get(PRECISION_SYMBOL.as_bytes())
                .with_context(|| {
                    format!(
                        "symbol `{}` not found in {}",
                        PRECISION_SYMBOL,
                        self.path.display()
                    )
                })?;
            query()
        };

        Ok(code)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A precision code supplied by the operator instead of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPrecision(pub i32);

impl PrecisionProbe for FixedPrecision {
    fn precision_code(&self) -> Result<i32> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        format!("fixed code {}", self.0)
    }
}

/// Query a probe and resolve the code.
pub fn detect_precision(probe: &dyn PrecisionProbe) -> Result<Precision> {
    let code = probe.precision_code()?;
    let precision = Precision::from_code(code)?;

    tracing::info!(
        "Detected {} precision (qreal = {}) from {}",
        precision,
        precision.c_type(),
        probe.describe()
    );

    Ok(precision)
}
