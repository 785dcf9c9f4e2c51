//! Build command - fetch, transform, assemble and save a totem pack.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use totempack::assets::AssetStore;
use totempack::pipeline::TotemPackPipeline;
use totempack::provider::{AsyncReqwestClient, SkinEndpoints, SkinService};
use totempack::texture::TextureProcessor;

use super::common::resolve_settings;
use crate::error::CliError;
use crate::runner::CliRunner;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Minecraft username whose skin becomes the totem
    pub username: String,

    /// Directory to save the archive in (default: config [output] directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory or http(s) URL holding the pack descriptor and item model
    #[arg(long)]
    pub assets: Option<String>,

    /// Base URL of the skin service
    #[arg(long)]
    pub skin_service: Option<String>,

    /// Enable debug logging and mirror log events to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Run the build command.
pub async fn run(args: BuildArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug, args.debug)?;
    runner.log_startup("build");

    let settings = resolve_settings(
        runner.config(),
        args.skin_service.as_deref(),
        args.assets.as_deref(),
        args.output.as_deref(),
    );

    let client = AsyncReqwestClient::new().map_err(CliError::HttpClient)?;
    let skins = SkinService::new(client.clone(), SkinEndpoints::new(settings.skin_url));
    let assets = AssetStore::from_location(&settings.assets, client);
    let pipeline = TotemPackPipeline::new(
        skins,
        assets,
        TextureProcessor::default(),
        settings.output_dir,
    );

    let spinner = (!args.debug).then(|| spinner(&args.username));
    let result = pipeline.download_totem_pack(&args.username).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = result?;
    println!("{} {}", style("✓").green(), outcome.path.display());
    Ok(())
}

fn spinner(username: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("Building totem pack for {}", username));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
