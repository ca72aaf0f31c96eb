use anyhow::Context;
use inforadio_feed::{
    create_feed, locate_stream_url, logging, BrowserBuilder, FeedConfig, SourceConfig,
};

async fn run() -> anyhow::Result<()> {
    let browser = BrowserBuilder::new().headless(true).build_config();
    let url = locate_stream_url(browser, &SourceConfig::default())
        .await
        .context("failed to get feed URL")?;

    create_feed(url, &FeedConfig::default()).context("failed to create feed")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
