// ABOUTME: Runtime detection logic for the local system.
// ABOUTME: Honors explicit config and DOCKER_HOST, then probes Podman and Docker sockets.

use super::types::{RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,

    #[error("unsupported engine host: {0}")]
    UnsupportedHost(String),
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect container runtime on the local system.
///
/// Detection order:
/// 1. Explicit `config` values
/// 2. The `DOCKER_HOST` environment variable
/// 3. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 4. Rootful Podman socket (`/run/podman/podman.sock`)
/// 5. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: Option<&RuntimeConfig>) -> Result<RuntimeInfo, DetectionError> {
    let docker_host = std::env::var("DOCKER_HOST")
        .ok()
        .filter(|h| !h.is_empty());
    detect_with(config, docker_host.as_deref(), get_uid().as_deref(), |p| {
        Path::new(p).exists()
    })
}

fn detect_with(
    config: Option<&RuntimeConfig>,
    docker_host: Option<&str>,
    uid: Option<&str>,
    exists: impl Fn(&str) -> bool,
) -> Result<RuntimeInfo, DetectionError> {
    if let Some(cfg) = config {
        match (cfg.runtime, cfg.socket.as_deref()) {
            (runtime, Some(socket)) => {
                let endpoint = parse_host(socket)?;
                return Ok(RuntimeInfo {
                    runtime_type: runtime.unwrap_or_else(|| RuntimeType::from_endpoint(&endpoint)),
                    endpoint,
                });
            }
            (Some(runtime_type), None) => {
                return Ok(RuntimeInfo {
                    runtime_type,
                    endpoint: default_socket_path(runtime_type).to_string(),
                });
            }
            (None, None) => {}
        }
    }

    if let Some(host) = docker_host {
        let endpoint = parse_host(host)?;
        tracing::debug!(%endpoint, "using DOCKER_HOST");
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::from_endpoint(&endpoint),
            endpoint,
        });
    }

    if let Some(uid) = uid {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if exists(&rootless_socket) {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                endpoint: rootless_socket,
            });
        }
    }

    if exists(ROOTFUL_PODMAN) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            endpoint: ROOTFUL_PODMAN.to_string(),
        });
    }

    if exists(DOCKER_SOCKET) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            endpoint: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

/// Normalize a host string: `unix://` prefixes are stripped, TCP hosts kept.
fn parse_host(host: &str) -> Result<String, DetectionError> {
    if let Some(path) = host.strip_prefix("unix://") {
        return Ok(path.to_string());
    }
    if host.starts_with("tcp://") || host.starts_with("http://") || host.starts_with('/') {
        return Ok(host.to_string());
    }
    Err(DetectionError::UnsupportedHost(host.to_string()))
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> &'static str {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET,
        RuntimeType::Podman => ROOTFUL_PODMAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing_exists(_: &str) -> bool {
        false
    }

    #[test]
    fn explicit_runtime_uses_default_socket() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Podman),
            socket: None,
        };
        let info = detect_with(Some(&config), Some("tcp://ignored:2375"), None, nothing_exists)
            .unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Podman);
        assert_eq!(info.endpoint, ROOTFUL_PODMAN);
    }

    #[test]
    fn explicit_socket_guesses_runtime() {
        let config = RuntimeConfig {
            runtime: None,
            socket: Some("unix:///run/user/1000/podman/podman.sock".to_string()),
        };
        let info = detect_with(Some(&config), None, None, nothing_exists).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Podman);
        assert_eq!(info.endpoint, "/run/user/1000/podman/podman.sock");
    }

    #[test]
    fn docker_host_beats_socket_probing() {
        let info = detect_with(None, Some("tcp://10.0.0.5:2375"), Some("1000"), |_| true).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Docker);
        assert_eq!(info.http_address(), Some("tcp://10.0.0.5:2375"));
    }

    #[test]
    fn unsupported_docker_host_is_rejected() {
        let err = detect_with(None, Some("ssh://user@host"), None, nothing_exists).unwrap_err();
        assert!(matches!(err, DetectionError::UnsupportedHost(_)));
    }

    #[test]
    fn probes_rootless_podman_first() {
        let info = detect_with(None, None, Some("1000"), |_| true).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Podman);
        assert_eq!(info.endpoint, "/run/user/1000/podman/podman.sock");
    }

    #[test]
    fn falls_back_to_docker_socket() {
        let info = detect_with(None, None, Some("1000"), |p| p == DOCKER_SOCKET).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Docker);
        assert_eq!(info.endpoint, DOCKER_SOCKET);
        assert!(info.http_address().is_none());
    }

    #[test]
    fn reports_missing_runtime() {
        let err = detect_with(None, None, None, nothing_exists).unwrap_err();
        assert!(matches!(err, DetectionError::NoRuntimeFound));
    }
}
