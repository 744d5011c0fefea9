//! Binding module construction: header cleaning, toolchain commands and
//! the module generator.

pub mod bindings;
pub mod generator;
pub mod toolchain;

pub use generator::{BindingRequest, InterfaceGenerator, LinkSpec, NativeModuleGenerator};
