//! Core building blocks for the yatra service: layered settings, the
//! module trait every resource area implements, and the registry that
//! drives module lifecycle at startup and shutdown.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
