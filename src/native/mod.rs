//! Access to the prebuilt native QuEST library.

pub mod loader;

pub use loader::{detect_precision, FixedPrecision, NativeLibrary, PrecisionProbe};
