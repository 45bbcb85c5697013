// ABOUTME: Entry point for the dockside CLI application.
// ABOUTME: Parses arguments and dispatches to the image inventory.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ImageCommands};
use dockside::config::Config;
use dockside::error::Result;
use dockside::inventory::{ImageInventory, ImageList, ImageRemove, ImagesPrune};
use dockside::output::Output;
use dockside::runtime::{
    BollardConnector, EngineConnector, RuntimeError, RuntimeInfoTrait, local_connector,
};
use dockside::types::ImageId;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let output = Output::new(config.output);

    if let Err(e) = run(cli.command, &config, &output).await {
        output.error(&e.to_string());
        if let Some(hint) = e.hint() {
            output.hint(hint);
        }
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = env::current_dir()?;
    Ok(Config::discover_or_default(&cwd)?.with_overrides(
        cli.runtime,
        cli.socket.clone(),
        cli.output,
    ))
}

async fn run(command: Commands, config: &Config, output: &Output) -> Result<()> {
    let connector = local_connector(Some(&config.runtime_config()), config.timeout)?;

    match command {
        Commands::Images { command } => images(command, connector, output).await,
        Commands::Info => info(connector, output).await,
    }
}

async fn images(command: ImageCommands, connector: BollardConnector, output: &Output) -> Result<()> {
    let inventory = ImageInventory::new(connector);

    match command {
        ImageCommands::List { all } => {
            let response = inventory.list_images(&ImageList { all }).await?;
            output.images(&response);
        }
        ImageCommands::Remove { id, force } => {
            let request = ImageRemove {
                id: ImageId::new(id),
                force,
            };
            let effects = inventory.remove_image(&request).await?;
            output.removed(&Vec::from(effects));
        }
        ImageCommands::Prune { all } => {
            output.progress(if all {
                "Removing all unused images..."
            } else {
                "Removing dangling images..."
            });
            let response = inventory.prune_images(&ImagesPrune { all }).await?;
            output.pruned(&response);
        }
    }

    Ok(())
}

async fn info(connector: BollardConnector, output: &Output) -> Result<()> {
    let runtime = connector.connect().await.map_err(RuntimeError::from)?;
    let metadata = runtime.info().await.map_err(RuntimeError::from)?;
    output.runtime(connector.endpoint(), &metadata);
    Ok(())
}
