// ABOUTME: Composable capability traits for container engines.
// ABOUTME: Defines ImageOps, RuntimeInfo, and the EngineConnector.

mod connector;
mod image;
mod runtime_info;
mod shared_types;

pub use connector::EngineConnector;
pub use image::{ImageError, ImageOps};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;
