mod application;
mod config;
mod domain;
mod infrastructure;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use application::sphereify_service::SphereifyService;
use domain::sphereify_params::SphereifyParams;
use infrastructure::console::TerminalConsole;
use infrastructure::file_storage::LocalFileStorage;
use infrastructure::image_processor::DefaultImageProcessor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the dialogue; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("loading config from {}", config::PATH);
    let config = config::load(Path::new(config::PATH)).context("failed to load configuration")?;
    let params = SphereifyParams::new(config.sphereify.shrink)
        .context("invalid shrink factor in configuration")?;
    tracing::debug!("shrink factor is {}", params.shrink());

    let service = SphereifyService::new(
        Arc::new(DefaultImageProcessor::new()),
        LocalFileStorage::new(),
        params,
        config.sphereify.output_prefix,
    );

    let mut console = TerminalConsole::stdio();
    service
        .run_interactive(&mut console)
        .await
        .context("failed to sphereify the image")?;

    Ok(())
}
