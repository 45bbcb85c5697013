// ABOUTME: Image operations trait for container engines.
// ABOUTME: List, remove, and prune images.

use super::shared_types::{PruneReport, RawImage, RemovalEffect};
use async_trait::async_trait;

/// Image operations: list, remove, prune.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// List images. With `all`, intermediate images are included.
    async fn list_images(&self, all: bool) -> Result<Vec<RawImage>, ImageError>;

    /// Remove an image by id or reference, returning what the engine did.
    async fn remove_image(&self, id: &str, force: bool) -> Result<Vec<RemovalEffect>, ImageError>;

    /// Prune unused images. With `dangling_only`, only untagged images qualify.
    async fn prune_images(&self, dangling_only: bool) -> Result<PruneReport, ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("image in use, cannot remove: {0}")]
    InUse(String),

    #[error("list failed: {0}")]
    ListFailed(String),

    #[error("prune failed: {0}")]
    PruneFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
