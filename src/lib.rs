//! questbind - Build-time binding generator for the QuEST simulator
//!
//! This crate inspects a prebuilt QuEST shared library, resolves the
//! precision of its `qreal` scalar, reduces the public header to plain C
//! declarations and builds a loadable binding module from them.

pub mod builder;
pub mod core;
pub mod native;
pub mod ops;
pub mod util;

pub use crate::core::{HostPlatform, Precision, PrecisionError, QuestLayout};
pub use ops::{build_bindings, BuildOptions};
pub use util::config::Config;
