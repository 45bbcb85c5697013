// ABOUTME: Application-wide error types for dockside.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::inventory::InventoryError;
use crate::runtime::{RuntimeError, RuntimeErrorKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    #[error("{0}")]
    Inventory(#[from] InventoryError),
}

impl Error {
    /// Suggestion for errors caused by the local engine setup.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Runtime(e) => Some(e.kind().hint()),
            Error::Inventory(InventoryError::EngineUnavailable(_)) => {
                Some(RuntimeErrorKind::ConnectionFailed.hint())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
