// ABOUTME: In-memory engine double implementing the capability traits.
// ABOUTME: Records every call so tests can assert on what reached the engine.

use async_trait::async_trait;
use dockside::runtime::{
    EngineConnector, ImageError, ImageOps, PruneReport, RawImage, RemovalEffect, RuntimeInfoError,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// A call that reached the fake engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect,
    List { all: bool },
    Remove { id: String, force: bool },
    Prune { dangling_only: bool },
}

/// Canned engine answers. `None` makes the call fail.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub reachable: bool,
    pub images: Option<Vec<RawImage>>,
    pub removal: Option<Vec<RemovalEffect>>,
    pub prune: Option<PruneReport>,
}

impl Script {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            images: Some(Vec::new()),
            removal: Some(Vec::new()),
            prune: Some(PruneReport::default()),
        }
    }
}

#[derive(Clone)]
pub struct FakeConnector {
    script: Arc<Script>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeConnector {
    pub fn new(script: Script) -> Self {
        Self {
            script: Arc::new(script),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

pub struct FakeEngine {
    script: Arc<Script>,
    calls: Arc<Mutex<Vec<Call>>>,
}

#[async_trait]
impl EngineConnector for FakeConnector {
    type Engine = FakeEngine;

    async fn connect(&self) -> Result<FakeEngine, RuntimeInfoError> {
        self.calls.lock().push(Call::Connect);
        if !self.script.reachable {
            return Err(RuntimeInfoError::ConnectionFailed(
                "dial unix /var/run/docker.sock: connection refused".to_string(),
            ));
        }
        Ok(FakeEngine {
            script: Arc::clone(&self.script),
            calls: Arc::clone(&self.calls),
        })
    }
}

#[async_trait]
impl ImageOps for FakeEngine {
    async fn list_images(&self, all: bool) -> Result<Vec<RawImage>, ImageError> {
        self.calls.lock().push(Call::List { all });
        self.script
            .images
            .clone()
            .ok_or_else(|| ImageError::ListFailed("daemon returned 500".to_string()))
    }

    async fn remove_image(&self, id: &str, force: bool) -> Result<Vec<RemovalEffect>, ImageError> {
        self.calls.lock().push(Call::Remove {
            id: id.to_string(),
            force,
        });
        self.script
            .removal
            .clone()
            .ok_or_else(|| ImageError::NotFound(id.to_string()))
    }

    async fn prune_images(&self, dangling_only: bool) -> Result<PruneReport, ImageError> {
        self.calls.lock().push(Call::Prune { dangling_only });
        self.script.prune.clone().ok_or_else(|| {
            ImageError::PruneFailed("a prune operation is already running".to_string())
        })
    }
}

/// Shorthand for a raw engine record.
pub fn raw(id: &str, repo_tags: &[&str], size: i64, created: i64) -> RawImage {
    RawImage {
        id: id.to_string(),
        repo_tags: repo_tags.iter().map(|s| s.to_string()).collect(),
        size,
        created,
    }
}
