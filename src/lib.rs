// ABOUTME: Library root for dockside - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod output;
pub mod runtime;
pub mod types;
