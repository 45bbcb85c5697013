// ABOUTME: Image inventory facade over a container engine.
// ABOUTME: Lists, removes, and prunes images and normalizes the results.

mod error;
mod repo_tag;
mod types;

pub use error::InventoryError;
pub use repo_tag::{NONE_PLACEHOLDER, name_and_tag, split_repo_tag};
pub use types::{
    Image, ImageList, ImageListResponse, ImageRemove, ImagesPrune, ImagesPruneResponse,
    PruneDeletedItem,
};

use crate::runtime::{EngineConnector, ImageOps, RemovalEffect};
use nonempty::NonEmpty;

/// Image inventory backed by an injected engine connector.
///
/// Every operation opens its own connection and performs a single engine
/// call, so one inventory can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ImageInventory<C> {
    connector: C,
}

impl<C: EngineConnector> ImageInventory<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    async fn engine(&self) -> Result<C::Engine, InventoryError> {
        self.connector
            .connect()
            .await
            .map_err(InventoryError::EngineUnavailable)
    }

    /// List images sorted by name.
    pub async fn list_images(
        &self,
        request: &ImageList,
    ) -> Result<ImageListResponse, InventoryError> {
        let engine = self.engine().await?;
        let raw = engine.list_images(request.all).await?;
        tracing::debug!(count = raw.len(), all = request.all, "listed images");
        Ok(ImageListResponse::from_raw(raw))
    }

    /// Remove an image.
    ///
    /// A removal the engine accepts but reports no effects for is treated as
    /// a failure ([`InventoryError::NoEffect`]).
    pub async fn remove_image(
        &self,
        request: &ImageRemove,
    ) -> Result<NonEmpty<RemovalEffect>, InventoryError> {
        if request.id.is_empty() {
            return Err(InventoryError::InvalidRequest(
                "image id cannot be empty".to_string(),
            ));
        }

        let engine = self.engine().await?;
        let effects = engine
            .remove_image(request.id.as_str(), request.force)
            .await?;

        NonEmpty::from_vec(effects).ok_or_else(|| {
            tracing::warn!(id = %request.id, "engine reported no removal effects");
            InventoryError::NoEffect
        })
    }

    /// Prune unused images. An empty report is a success.
    pub async fn prune_images(
        &self,
        request: &ImagesPrune,
    ) -> Result<ImagesPruneResponse, InventoryError> {
        let engine = self.engine().await?;
        let report = engine.prune_images(!request.all).await?;
        tracing::debug!(
            deleted = report.images_deleted.len(),
            space_reclaimed = report.space_reclaimed,
            "pruned images"
        );
        Ok(report.into())
    }
}
