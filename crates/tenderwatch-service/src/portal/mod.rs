//! Portal registry.

pub mod registry;

pub use registry::PortalRegistry;
