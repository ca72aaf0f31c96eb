use std::path::PathBuf;
use std::time::Duration;

/// Info Radio's daily news page. Both the scrape target and the feed's redirection URL.
pub const INFORADIO_URL: &str = "https://infostart.hu/inforadio/napinfo";

/// Chartable/Podtrac redirect chain wrapped around the real MP3 link.
pub const TRACKING_PREFIX: &str = "https://chtbl.com/track/GB95AD/dts.podtrac.com/redirect.mp3";

pub const FEED_FILE: &str = "inforadio.json";

/// Launch options for the headless browser.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub chrome_path: Option<String>,
    /// How long selector lookups wait for an element to render (default: 30s).
    pub default_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            default_timeout: Duration::from_secs(30),
        }
    }
}

pub struct BrowserBuilder {
    config: BrowserConfig,
}

impl BrowserBuilder {
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    /// Set how long selector lookups wait before giving up.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    pub fn build_config(self) -> BrowserConfig {
        self.config
    }
}

impl Default for BrowserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the stream link lives and how to dig it out.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub page_url: String,
    /// Cookie consent "accept" button.
    pub consent_selector: String,
    /// Play triggers of the news list, newest first.
    pub entry_selector: String,
    /// Download link in the player modal that opens after clicking an entry.
    pub player_link_selector: String,
    pub link_attribute: String,
    pub tracking_prefix: String,
    pub replacement: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            page_url: INFORADIO_URL.into(),
            consent_selector: "button[mode='primary']".into(),
            entry_selector: "span[data-bs-toggle='modal']".into(),
            player_link_selector: "div.infoplayer-head-icons > a".into(),
            link_attribute: "href".into(),
            tracking_prefix: TRACKING_PREFIX.into(),
            replacement: "https:/".into(),
        }
    }
}

/// Fixed text of the feed record and where it is written.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub title_text: String,
    pub main_text: String,
    pub redirection_url: String,
    pub output_path: PathBuf,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title_text: "Latest news from Info Radio".into(),
            main_text: String::new(),
            redirection_url: INFORADIO_URL.into(),
            output_path: PathBuf::from(FEED_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = BrowserBuilder::new()
            .headless(false)
            .viewport(800, 600)
            .chrome_path("/usr/bin/chromium")
            .timeout(Duration::from_secs(5))
            .build_config();

        assert!(!config.headless);
        assert_eq!((config.viewport_width, config.viewport_height), (800, 600));
        assert_eq!(config.chrome_path.as_deref(), Some("/usr/bin/chromium"));
        assert_eq!(config.default_timeout, Duration::from_secs(5));
    }

    #[test]
    fn feed_redirects_to_the_scraped_page() {
        assert_eq!(
            FeedConfig::default().redirection_url,
            SourceConfig::default().page_url
        );
        assert_eq!(FeedConfig::default().output_path, PathBuf::from("inforadio.json"));
    }
}
