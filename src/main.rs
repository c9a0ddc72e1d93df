use anyhow::Context;
use clap::Parser;
use reviews_carousel::cli::Cli;
use reviews_carousel::logging::init_tracing;
use reviews_carousel::reviews::ReviewsClient;
use reviews_carousel::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(log = %log_path.display(), "Starting reviews-carousel");

    let client = ReviewsClient::new(&config.api)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    ui::run(&config, client, runtime.handle())?;

    tracing::info!("Exiting");
    Ok(())
}
