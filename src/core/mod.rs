//! Core data structures for questbind.
//!
//! - Scalar precision of the native library
//! - Host platform and shared library naming
//! - Project layout

pub mod layout;
pub mod platform;
pub mod precision;

pub use layout::QuestLayout;
pub use platform::HostPlatform;
pub use precision::{Precision, PrecisionError, PRECISION_PLACEHOLDER};
