// ABOUTME: Connector trait that hands out connected engine handles.
// ABOUTME: Each inventory operation asks for its own connection.

use super::image::ImageOps;
use super::runtime_info::RuntimeInfoError;
use async_trait::async_trait;

/// Produces a connected engine for a single operation.
#[async_trait]
pub trait EngineConnector: Send + Sync {
    type Engine: ImageOps;

    /// Establish a connection, failing if the engine cannot be reached.
    async fn connect(&self) -> Result<Self::Engine, RuntimeInfoError>;
}
