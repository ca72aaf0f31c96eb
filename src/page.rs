use std::time::Duration;

use chromiumoxide::page::Page as CrPage;

use crate::driver::PageDriver;
use crate::element::Element;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with the handful of calls the locator uses.
pub struct Page {
    inner: CrPage,
    default_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, default_timeout: Duration) -> Self {
        Self {
            inner,
            default_timeout,
        }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(format!("{url}: {e}")))?;
        Ok(())
    }

    // ── Element Queries ─────────────────────────────────────────────

    /// Find an element matching the given CSS selector, without waiting.
    pub async fn find_element(&self, selector: &str) -> Result<Element> {
        let el = self
            .inner
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        Ok(Element::new(el, selector))
    }

    /// Find all elements matching the given CSS selector.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<Element>> {
        let els = self
            .inner
            .find_elements(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        Ok(els.into_iter().map(|el| Element::new(el, selector)).collect())
    }

    /// Wait for an element matching the given CSS selector to appear in the DOM.
    /// Polls every 100ms up to the configured default timeout.
    pub async fn wait_for_selector(&self, selector: &str) -> Result<Element> {
        let timeout = self.default_timeout;
        let interval = Duration::from_millis(100);
        let start = std::time::Instant::now();

        loop {
            match self.find_element(selector).await {
                Ok(el) => return Ok(el),
                Err(_) if start.elapsed() < timeout => {
                    tokio::time::sleep(interval).await;
                }
                Err(last) => return Err(timeout_error(selector, timeout, &last)),
            }
        }
    }

    /// Close this page (tab).
    pub async fn close(self) -> Result<()> {
        self.inner.close().await.map_err(Error::CdpError)
    }
}

/// Timeout error that still names the final lookup failure.
fn timeout_error(selector: &str, timeout: Duration, last: &Error) -> Error {
    Error::ElementNotFound(format!(
        "{selector}: not present after {timeout:?} (last error: {last})"
    ))
}

impl PageDriver for Page {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<()> {
        Page::goto(self, url).await
    }

    /// Controls like the consent button and the player modal render late,
    /// so single lookups wait for the selector.
    async fn find_element(&self, selector: &str) -> Result<Element> {
        self.wait_for_selector(selector).await
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<Element>> {
        Page::find_elements(self, selector).await
    }
}
