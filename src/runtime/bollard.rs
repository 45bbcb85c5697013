// ABOUTME: Bollard-based container engine implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{
    EngineConnector, ImageError, ImageOps, PruneReport, RawImage, RemovalEffect, RuntimeInfo,
    RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::types::{RuntimeInfo as RuntimeEndpoint, RuntimeType};
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::ImageDeleteResponseItem;
use bollard::query_parameters::{
    ListImagesOptionsBuilder, PruneImagesOptions, RemoveImageOptions,
};
use std::collections::HashMap;
use std::time::Duration;

/// Transport timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_image_list_error(e: bollard::errors::Error) -> ImageError {
    ImageError::ListFailed(e.to_string())
}

fn map_image_remove_error(e: bollard::errors::Error, id: &str) -> ImageError {
    match &e {
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 404 =>
        {
            ImageError::NotFound(id.to_string())
        }
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ImageError::InUse(message.clone()),
        _ => ImageError::Runtime(format!("failed to remove {}: {}", id, e)),
    }
}

fn map_image_prune_error(e: bollard::errors::Error) -> ImageError {
    ImageError::PruneFailed(e.to_string())
}

fn map_connection_error(e: bollard::errors::Error) -> RuntimeInfoError {
    RuntimeInfoError::ConnectionFailed(e.to_string())
}

fn removal_effect(item: ImageDeleteResponseItem) -> RemovalEffect {
    RemovalEffect {
        deleted: item.deleted,
        untagged: item.untagged,
    }
}

/// Bollard takes whole seconds; partial seconds round up so a short timeout never becomes zero.
fn whole_seconds(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

/// Engine filter restricting a prune to dangling images, or lifting that restriction.
fn dangling_filter(dangling_only: bool) -> HashMap<String, Vec<String>> {
    HashMap::from([("dangling".to_string(), vec![dangling_only.to_string()])])
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container engine implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Build a client for a detected runtime endpoint.
    ///
    /// This does not touch the network; use [`RuntimeInfo::ping`] to verify
    /// that the engine answers.
    pub fn connect(info: &RuntimeEndpoint, timeout: Duration) -> Result<Self, RuntimeInfoError> {
        let timeout_secs = whole_seconds(timeout);
        let client = match info.http_address() {
            Some(addr) => {
                Docker::connect_with_http(addr, timeout_secs, bollard::API_DEFAULT_VERSION)
            }
            None => {
                Docker::connect_with_unix(&info.endpoint, timeout_secs, bollard::API_DEFAULT_VERSION)
            }
        }
        .map_err(map_connection_error)?;
        Ok(Self::new(client, info.runtime_type))
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self.client.info().await.map_err(map_connection_error)?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            api_version: bollard::API_DEFAULT_VERSION.to_string(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client.ping().await.map_err(map_connection_error)?;
        Ok(())
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self, all: bool) -> Result<Vec<RawImage>, ImageError> {
        let opts = ListImagesOptionsBuilder::new().all(all).build();

        tracing::debug!(all, "listing images");
        let images = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(map_image_list_error)?;

        Ok(images
            .into_iter()
            .map(|image| RawImage {
                id: image.id,
                repo_tags: image.repo_tags,
                size: image.size,
                created: image.created,
            })
            .collect())
    }

    async fn remove_image(&self, id: &str, force: bool) -> Result<Vec<RemovalEffect>, ImageError> {
        let opts = RemoveImageOptions {
            force,
            ..Default::default()
        };

        tracing::debug!(id, force, "removing image");
        let items = self
            .client
            .remove_image(id, Some(opts), None)
            .await
            .map_err(|e| map_image_remove_error(e, id))?;

        Ok(items.into_iter().map(removal_effect).collect())
    }

    async fn prune_images(&self, dangling_only: bool) -> Result<PruneReport, ImageError> {
        let opts = PruneImagesOptions {
            filters: Some(dangling_filter(dangling_only)),
            ..Default::default()
        };

        tracing::debug!(dangling_only, "pruning images");
        let report = self
            .client
            .prune_images(Some(opts))
            .await
            .map_err(map_image_prune_error)?;

        Ok(PruneReport {
            images_deleted: report
                .images_deleted
                .unwrap_or_default()
                .into_iter()
                .map(removal_effect)
                .collect(),
            space_reclaimed: report.space_reclaimed.unwrap_or(0),
        })
    }
}

// =============================================================================
// BollardConnector
// =============================================================================

/// Connects to a fixed runtime endpoint, verifying it with a ping.
#[derive(Debug, Clone)]
pub struct BollardConnector {
    endpoint: RuntimeEndpoint,
    timeout: Duration,
}

impl BollardConnector {
    pub fn new(endpoint: RuntimeEndpoint, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn endpoint(&self) -> &RuntimeEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl EngineConnector for BollardConnector {
    type Engine = BollardRuntime;

    async fn connect(&self) -> Result<BollardRuntime, RuntimeInfoError> {
        let runtime = BollardRuntime::connect(&self.endpoint, self.timeout)?;
        runtime.ping().await.inspect_err(|e| {
            tracing::warn!(endpoint = %self.endpoint.endpoint, "engine unreachable: {e}");
        })?;
        Ok(runtime)
    }
}
