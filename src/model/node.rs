// ABOUTME: Node and environment records.
// ABOUTME: A node is one managed engine host; environments group projects.

use crate::types::{EnvironmentKey, NodeKey};
use serde::{Deserialize, Serialize};

/// A managed host running a container engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeKey,
    pub name: String,
    /// Base URL used to reach containers published on this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: EnvironmentKey,
    pub name: String,
}
