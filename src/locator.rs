use crate::config::SourceConfig;
use crate::driver::{ElementDriver, PageDriver};
use crate::error::{Error, Result};

/// Walk the news page and return the latest stream URL.
///
/// Accepts the cookie dialog, opens the first play entry and reads the
/// player's download link, with the tracking redirect stripped.
pub async fn locate<P: PageDriver>(page: &P, source: &SourceConfig) -> Result<String> {
    page.goto(&source.page_url).await?;
    tracing::debug!(url = %source.page_url, "page loaded");

    page.find_element(&source.consent_selector)
        .await?
        .click()
        .await?;
    tracing::debug!("cookies accepted");

    let entries = page.find_elements(&source.entry_selector).await?;
    // DOM order puts the newest bulletin first
    let Some(latest) = entries.first() else {
        return Err(Error::NoEntries(source.entry_selector.clone()));
    };
    tracing::debug!(count = entries.len(), "found play entries");
    latest.click().await?;

    let href = page
        .find_element(&source.player_link_selector)
        .await?
        .attribute(&source.link_attribute)
        .await?
        .ok_or_else(|| Error::MissingAttribute {
            selector: source.player_link_selector.clone(),
            attribute: source.link_attribute.clone(),
        })?;

    let url = rewrite_stream_url(&href, &source.tracking_prefix, &source.replacement);
    tracing::info!(%url, "located stream");
    Ok(url)
}

/// Replace the first occurrence of `prefix` with `replacement`.
/// Links without the prefix come back unchanged.
pub fn rewrite_stream_url(href: &str, prefix: &str, replacement: &str) -> String {
    if !href.contains(prefix) {
        tracing::debug!(%href, "no tracking prefix to strip");
        return href.to_owned();
    }
    href.replacen(prefix, replacement, 1)
}
