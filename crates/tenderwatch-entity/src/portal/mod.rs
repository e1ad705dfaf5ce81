//! Portal entity.

pub mod model;

pub use model::{Portal, PortalType};
