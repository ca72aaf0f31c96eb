pub mod browser;
pub mod config;
pub mod driver;
pub mod element;
pub mod error;
pub mod feed;
pub mod locator;
pub mod logging;
pub mod page;

pub use browser::Session;
pub use config::{BrowserBuilder, BrowserConfig, FeedConfig, SourceConfig};
pub use driver::with_session;
pub use error::{Error, Result};
pub use feed::{create_feed, FeedRecord};
pub use locator::{locate, rewrite_stream_url};
pub use page::Page;

/// Launch a browser, find the latest stream URL and shut the browser down again.
pub async fn locate_stream_url(browser: BrowserConfig, source: &SourceConfig) -> Result<String> {
    let session = Session::launch(browser).await?;
    with_session(session, async |page: &Page| locate(page, source).await).await
}
