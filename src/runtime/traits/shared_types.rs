// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: Raw image records, removal effects, prune reports, runtime metadata.

/// One image as reported by the engine, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawImage {
    /// Content identifier.
    pub id: String,
    /// Repository tags in `name:tag` form, in engine order.
    pub repo_tags: Vec<String>,
    /// Size in bytes.
    pub size: i64,
    /// Creation time in seconds since the Unix epoch.
    pub created: i64,
}

/// A single effect of an image removal: a layer deleted or a tag untagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalEffect {
    pub deleted: Option<String>,
    pub untagged: Option<String>,
}

impl RemovalEffect {
    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            deleted: Some(id.into()),
            untagged: None,
        }
    }

    pub fn untagged(reference: impl Into<String>) -> Self {
        Self {
            deleted: None,
            untagged: Some(reference.into()),
        }
    }
}

/// Outcome of a prune call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub images_deleted: Vec<RemovalEffect>,
    /// Disk space reclaimed in bytes.
    pub space_reclaimed: i64,
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}
