//! Preview command - describe the 3D skin viewer as JSON.
//!
//! Without `--watch` the settings for one username are printed. With
//! `--watch`, usernames are read from stdin one per line and every viewer
//! reconfiguration is printed as a single JSON line. Closing stdin dismisses
//! the preview.

use std::io::Write;
use std::time::Duration;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use totempack::preview::{PreviewController, PreviewSettings, SkinViewer};
use totempack::provider::SkinEndpoints;

use super::common::resolve_debounce;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Grace period after stdin closes so the last username can settle.
const SETTLE_MARGIN: Duration = Duration::from_millis(50);

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Minecraft username shown first
    pub username: String,

    /// Follow usernames from stdin, one per line
    #[arg(long)]
    pub watch: bool,

    /// Base URL of the skin service
    #[arg(long)]
    pub skin_service: Option<String>,

    /// Milliseconds of quiet before a new username reaches the viewer
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Run the preview command.
pub async fn run(args: PreviewArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(false, false)?;
    runner.log_startup("preview");

    let endpoints = SkinEndpoints::new(
        args.skin_service
            .clone()
            .unwrap_or_else(|| runner.config().service.skin_url.clone()),
    );
    let settings = PreviewSettings::for_username(&endpoints, &args.username);

    if !args.watch {
        let json = serde_json::to_string_pretty(&settings).map_err(std::io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    let mut viewer = JsonLinesViewer::new(std::io::stdout());
    viewer.load_skin(&settings.skin_url);

    let debounce = resolve_debounce(runner.config(), args.debounce_ms);
    let controller = PreviewController::spawn(viewer, endpoints, debounce);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        controller.set_username(line.trim());
    }

    tokio::time::sleep(debounce + SETTLE_MARGIN).await;
    controller.shutdown().await?;
    Ok(())
}

/// Viewer that reports each configuration as one JSON line.
pub struct JsonLinesViewer<W> {
    out: W,
}

impl<W: Write + Send + 'static> JsonLinesViewer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, settings: &PreviewSettings) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, settings)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write + Send + 'static> SkinViewer for JsonLinesViewer<W> {
    fn load_skin(&mut self, url: &str) {
        if let Err(e) = self.emit(&PreviewSettings::new(url)) {
            warn!(error = %e, "failed to write preview settings");
        }
    }

    fn dispose(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "failed to flush preview output");
        }
    }
}
