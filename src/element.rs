use chromiumoxide::element::Element as CrElement;

use crate::driver::ElementDriver;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Element that remembers how it was found.
pub struct Element {
    inner: CrElement,
    selector: String,
}

impl Element {
    pub(crate) fn new(inner: CrElement, selector: impl Into<String>) -> Self {
        Self {
            inner,
            selector: selector.into(),
        }
    }

    /// Click this element (scrolls into view first).
    pub async fn click(&self) -> Result<()> {
        self.inner
            .click()
            .await
            .map_err(|e| Error::ClickError(format!("{}: {e}", self.selector)))?;
        Ok(())
    }

    /// Get the value of an attribute on this element.
    pub async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner
            .attribute(name)
            .await
            .map_err(|e| Error::AttributeError(format!("{}[{name}]: {e}", self.selector)))
    }
}

impl ElementDriver for Element {
    async fn click(&self) -> Result<()> {
        Element::click(self).await
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.get_attribute(name).await
    }
}
