// ABOUTME: Stored record shapes for nodes, environments, and compose projects.
// ABOUTME: Mapping and migrations belong to the persistence layer.

mod node;
mod node_compose_project;

pub use node::{Environment, Node};
pub use node_compose_project::{ModelError, NodeComposeProject};
