//! totempack CLI - command-line interface
//!
//! Builds totem resource packs and describes the 3D skin preview.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod runner;

use commands::{build::BuildArgs, preview::PreviewArgs};

#[derive(Parser)]
#[command(name = "totempack")]
#[command(version, about = "Build Minecraft totem-of-undying resource packs from player skins", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the totem pack for a player and save it as <USERNAME>.zip
    Build(BuildArgs),

    /// Print the 3D viewer settings for a player's skin as JSON
    Preview(PreviewArgs),

    /// Write the default configuration file
    Init,

    /// Print the configuration file path
    ConfigPath,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args).await,
        Commands::Preview(args) => commands::preview::run(args).await,
        Commands::Init => commands::init::run(),
        Commands::ConfigPath => commands::init::run_path(),
    };

    if let Err(e) = result {
        e.exit();
    }
}
