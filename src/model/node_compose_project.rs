// ABOUTME: Deployment of a compose library project onto a node.
// ABOUTME: Required many-to-one to Node, optional many-to-one to Environment.

use super::node::{Environment, Node};
use crate::types::{ComposeProjectKey, EnvironmentKey, NodeKey, ProjectName};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("node {given} does not match node_id {expected}")]
    NodeMismatch { expected: NodeKey, given: NodeKey },

    #[error("environment {given} does not match environment_id {expected:?}")]
    EnvironmentMismatch {
        expected: Option<EnvironmentKey>,
        given: EnvironmentKey,
    },
}

/// A compose project from the library, deployed under its own name on a node.
///
/// `node` and `environment` hold the related records when they were loaded
/// alongside this one. A loaded record must carry the same key as the
/// matching `*_id` field, also when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredProject")]
pub struct NodeComposeProject {
    pub id: ComposeProjectKey,
    pub node_id: NodeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    #[serde(default)]
    pub environment_id: Option<EnvironmentKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    pub library_project_name: ProjectName,
    pub project_name: ProjectName,
}

/// Wire form of a project, checked before it becomes a [`NodeComposeProject`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProject {
    id: ComposeProjectKey,
    node_id: NodeKey,
    #[serde(default)]
    node: Option<Node>,
    #[serde(default)]
    environment_id: Option<EnvironmentKey>,
    #[serde(default)]
    environment: Option<Environment>,
    library_project_name: ProjectName,
    project_name: ProjectName,
}

impl TryFrom<StoredProject> for NodeComposeProject {
    type Error = ModelError;

    fn try_from(stored: StoredProject) -> Result<Self, ModelError> {
        let mut project = Self::new(
            stored.id,
            stored.node_id,
            stored.library_project_name,
            stored.project_name,
        );
        project.environment_id = stored.environment_id;
        if let Some(node) = stored.node {
            project = project.with_node(node)?;
        }
        if let Some(environment) = stored.environment {
            project = project.with_environment(environment)?;
        }
        Ok(project)
    }
}

impl NodeComposeProject {
    pub fn new(
        id: ComposeProjectKey,
        node_id: NodeKey,
        library_project_name: ProjectName,
        project_name: ProjectName,
    ) -> Self {
        Self {
            id,
            node_id,
            node: None,
            environment_id: None,
            environment: None,
            library_project_name,
            project_name,
        }
    }

    /// Assign the project to an environment, dropping a stale loaded one.
    pub fn in_environment(mut self, environment_id: EnvironmentKey) -> Self {
        if self
            .environment
            .as_ref()
            .is_some_and(|e| e.id != environment_id)
        {
            self.environment = None;
        }
        self.environment_id = Some(environment_id);
        self
    }

    /// Attach the loaded owning node.
    pub fn with_node(mut self, node: Node) -> Result<Self, ModelError> {
        if node.id != self.node_id {
            return Err(ModelError::NodeMismatch {
                expected: self.node_id,
                given: node.id,
            });
        }
        self.node = Some(node);
        Ok(self)
    }

    /// Attach the loaded environment.
    pub fn with_environment(mut self, environment: Environment) -> Result<Self, ModelError> {
        if self.environment_id != Some(environment.id) {
            return Err(ModelError::EnvironmentMismatch {
                expected: self.environment_id,
                given: environment.id,
            });
        }
        self.environment = Some(environment);
        Ok(self)
    }

    /// Whether this deployment runs under a different name than its library project.
    pub fn is_renamed(&self) -> bool {
        self.library_project_name != self.project_name
    }
}
