use chapter_events::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting chapter events client");

    // Load configuration
    let config = startup::load_config().await?;

    // Load and print the feed
    startup::run(config).await
}
