// ABOUTME: Errors surfaced by the image inventory.
// ABOUTME: Engine failures pass through; zero-effect removal is its own error.

use crate::runtime::{ImageError, RuntimeInfoError};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("engine unavailable: {0}")]
    EngineUnavailable(#[source] RuntimeInfoError),

    #[error("engine query failed: {0}")]
    EngineQueryFailed(#[from] ImageError),

    /// The engine accepted the removal but reported nothing removed.
    #[error("delete unsuccessful")]
    NoEffect,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
