// ABOUTME: Runtime type definitions for Docker and Podman.
// ABOUTME: Includes RuntimeType enum and the detected RuntimeInfo endpoint.

use serde::{Deserialize, Serialize};

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl RuntimeType {
    /// Guess the runtime from a socket path or host address.
    pub fn from_endpoint(endpoint: &str) -> Self {
        if endpoint.contains("podman") {
            RuntimeType::Podman
        } else {
            RuntimeType::Docker
        }
    }
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// Detected runtime information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// The type of runtime detected.
    pub runtime_type: RuntimeType,
    /// Unix socket path, or a `tcp://`/`http://` address.
    pub endpoint: String,
}

impl RuntimeInfo {
    /// The HTTP address when the endpoint is a TCP host rather than a socket.
    pub fn http_address(&self) -> Option<&str> {
        if self.endpoint.starts_with("tcp://") || self.endpoint.starts_with("http://") {
            Some(&self.endpoint)
        } else {
            None
        }
    }
}

/// Configuration for explicit runtime override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    /// Explicit runtime type (overrides auto-detection).
    pub runtime: Option<RuntimeType>,
    /// Explicit socket path or host address (overrides default).
    pub socket: Option<String>,
}
