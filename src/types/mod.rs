// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod project_name;

pub use id::{ComposeProjectKey, EnvironmentKey, Id, ImageId, Key, NodeKey};
pub use project_name::{MAX_PROJECT_NAME_LEN, ProjectName, ProjectNameError};
