// ABOUTME: Container runtime detection and the bollard engine.
// ABOUTME: Auto-detects available runtime or uses explicit config.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::{BollardConnector, BollardRuntime, DEFAULT_TIMEOUT};
pub use detection::{DetectionError, detect_local};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    EngineConnector, ImageError, ImageOps, PruneReport, RawImage, RemovalEffect,
    RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError, RuntimeMetadata,
};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};

use std::time::Duration;

/// Detect the local runtime and build a connector for it.
pub fn local_connector(
    config: Option<&RuntimeConfig>,
    timeout: Duration,
) -> Result<BollardConnector, RuntimeError> {
    let endpoint = detect_local(config)?;
    tracing::debug!(
        runtime = %endpoint.runtime_type,
        endpoint = %endpoint.endpoint,
        "detected runtime"
    );
    Ok(BollardConnector::new(endpoint, timeout))
}
