//! High-level operations.
//!
//! This module contains the implementation of questbind commands.

pub mod build_bindings;

pub use build_bindings::{
    binding_request, build_bindings, open_probe, plan_bindings, prepare_cdef, BindingPlan,
    BuildOptions, BuildOutcome,
};
