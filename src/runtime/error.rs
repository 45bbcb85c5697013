// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Wraps detection and connection failures and suggests a fix for each.

use snafu::Snafu;

use super::detection::DetectionError;
use super::traits::RuntimeInfoError;

/// Failure to locate or reach the local engine.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("runtime connection failed: {source}"))]
    Connection { source: RuntimeInfoError },
}

/// What went wrong while reaching the engine, independent of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// No socket was configured and none of the well-known ones exist.
    NoRuntimeFound,
    /// `DOCKER_HOST` or the configured socket uses a scheme we cannot dial.
    UnsupportedHost,
    /// A socket was found but the engine did not answer.
    ConnectionFailed,
}

impl RuntimeErrorKind {
    /// One-line suggestion shown under the error in the CLI.
    pub fn hint(self) -> &'static str {
        match self {
            RuntimeErrorKind::NoRuntimeFound => {
                "start Docker or Podman, or pass --socket with the engine socket path"
            }
            RuntimeErrorKind::UnsupportedHost => {
                "use a unix:// socket, an absolute socket path, or a tcp:// address"
            }
            RuntimeErrorKind::ConnectionFailed => {
                "check that the engine is running and its socket is readable by this user"
            }
        }
    }
}

impl RuntimeError {
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => RuntimeErrorKind::NoRuntimeFound,
                DetectionError::UnsupportedHost(_) => RuntimeErrorKind::UnsupportedHost,
            },
            RuntimeError::Connection { .. } => RuntimeErrorKind::ConnectionFailed,
        }
    }
}

impl From<DetectionError> for RuntimeError {
    fn from(source: DetectionError) -> Self {
        RuntimeError::Detection { source }
    }
}

impl From<RuntimeInfoError> for RuntimeError {
    fn from(source: RuntimeInfoError) -> Self {
        RuntimeError::Connection { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_source() {
        let err = RuntimeError::from(DetectionError::NoRuntimeFound);
        assert_eq!(err.kind(), RuntimeErrorKind::NoRuntimeFound);

        let err = RuntimeError::from(DetectionError::UnsupportedHost("ssh://h".to_string()));
        assert_eq!(err.kind(), RuntimeErrorKind::UnsupportedHost);

        let err = RuntimeError::from(RuntimeInfoError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.kind(), RuntimeErrorKind::ConnectionFailed);
    }

    #[test]
    fn hints_differ_per_kind() {
        assert!(RuntimeErrorKind::NoRuntimeFound.hint().contains("--socket"));
        assert!(RuntimeErrorKind::UnsupportedHost.hint().contains("tcp://"));
        assert!(RuntimeErrorKind::ConnectionFailed.hint().contains("running"));
    }
}
