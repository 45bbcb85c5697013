// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use dockside::output::OutputMode;
use dockside::runtime::RuntimeType;

#[derive(Parser)]
#[command(name = "dockside")]
#[command(about = "Inspect and clean up container images on Docker and Podman")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputMode>,

    /// Container runtime to use (skips auto-detection)
    #[arg(long, global = true, value_enum)]
    pub runtime: Option<RuntimeType>,

    /// Engine socket path or tcp:// address
    #[arg(long, global = true)]
    pub socket: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage images
    Images {
        #[command(subcommand)]
        command: ImageCommands,
    },

    /// Show the detected runtime and its version
    Info,
}

#[derive(Subcommand)]
pub enum ImageCommands {
    /// List images sorted by repository name
    #[command(alias = "ls")]
    List {
        /// Include intermediate images
        #[arg(short, long)]
        all: bool,
    },

    /// Remove an image
    #[command(alias = "rm")]
    Remove {
        /// Image id or reference
        id: String,

        /// Remove even if used by containers
        #[arg(short, long)]
        force: bool,
    },

    /// Remove unused images (dangling only unless --all)
    Prune {
        /// Remove all unused images, not just dangling ones
        #[arg(short, long)]
        all: bool,
    },
}
