use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use explora_io::JsonFileBackend;
use explora_ui_common::{ExploraConfig, ExplorationService, ExplorationServiceBuilder};
use tracing::debug;

mod cli;
mod commands;
mod logging;
mod render;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level, cli.log_dir.as_deref())?;

    match &cli.command {
        Commands::Config { command } => commands::config::handle(command, cli.config.as_deref()),
        Commands::Pages {
            exploration,
            slug,
            format,
        } => {
            let service = build_service(&cli)?;
            commands::pages::handle(&service, exploration, *slug, *format).await
        }
        Commands::Walk {
            exploration,
            slug,
            auto,
        } => {
            let service = build_service(&cli)?;
            commands::walk::handle(&service, exploration, *slug, *auto).await
        }
    }
}

/// Effective configuration: file (explicit or default) plus command-line overrides.
pub(crate) fn load_config(cli_config: Option<&std::path::Path>) -> anyhow::Result<ExploraConfig> {
    match cli_config {
        Some(path) => ExploraConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => ExploraConfig::load().context("failed to load config"),
    }
}

fn build_service(cli: &Cli) -> anyhow::Result<ExplorationService> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = &cli.url {
        config.backend.url = Some(url.clone());
    }

    let mut builder = ExplorationServiceBuilder::new().config(config);
    if let Some(path) = &cli.pages_file {
        debug!(path = %path.display(), "reading pages from file");
        builder = builder.backend(Arc::new(JsonFileBackend::new(path)));
    }

    builder.build().context("failed to set up exploration service")
}
