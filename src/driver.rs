//! The slice of browser automation the locator needs.
//!
//! `Session`, `Page` and `Element` implement these against a live Chrome;
//! tests swap in an in-memory fake.
#![allow(async_fn_in_trait)]

use crate::error::Result;

#[cfg(test)]
pub(crate) mod fake;

pub trait PageDriver {
    type Element: ElementDriver;

    /// Navigate to the given URL and wait for the page to load.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Find the first element matching the CSS selector.
    async fn find_element(&self, selector: &str) -> Result<Self::Element>;

    /// Find every element matching the CSS selector, in document order.
    /// An empty page yields `Ok(vec![])`, not an error.
    async fn find_elements(&self, selector: &str) -> Result<Vec<Self::Element>>;
}

pub trait ElementDriver {
    async fn click(&self) -> Result<()>;

    async fn attribute(&self, name: &str) -> Result<Option<String>>;
}

/// A browser holding one page, torn down as a unit.
pub trait SessionDriver {
    type Page: PageDriver;

    fn page(&self) -> &Self::Page;

    /// Release the page and the browser. Failures are logged, not returned.
    async fn close(self);
}

/// Run `f` against the session's page, then close the session whatever the outcome.
pub async fn with_session<S, T, F>(session: S, f: F) -> Result<T>
where
    S: SessionDriver,
    F: AsyncFnOnce(&S::Page) -> Result<T>,
{
    let result = f(session.page()).await;
    session.close().await;
    result
}
