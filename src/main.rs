use anyhow::Context;
use clap::Parser;
use sentiscope::args::Cli;
use sentiscope::client::SentimentClient;
use sentiscope::config::Config;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    sentiscope::logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.apply_overrides(&cli.overrides());
    config.validate().context("Invalid configuration")?;

    let client =
        SentimentClient::new(&config.service).context("Failed to build HTTP client")?;
    let mode = config.trigger_mode();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    tracing::info!(
        endpoint = %client.endpoint(),
        trigger = %mode.describe(),
        "Starting sentiment session"
    );

    sentiscope::ui::runtime::run(client, mode, runtime.handle().clone())
        .context("Terminal session failed")?;

    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
