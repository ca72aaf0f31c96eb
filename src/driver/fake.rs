use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{ElementDriver, PageDriver, SessionDriver};
use crate::error::{Error, Result};

/// Records every call so tests can assert on what the locator did.
#[derive(Default)]
pub(crate) struct Log(RefCell<Vec<String>>);

impl Log {
    fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn clicks(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| e.strip_prefix("click ").map(str::to_owned))
            .collect()
    }
}

pub(crate) struct FakeElement {
    selector: String,
    index: usize,
    attributes: HashMap<String, String>,
    fail_click: bool,
    fail_attribute: bool,
    log: Rc<Log>,
}

impl ElementDriver for FakeElement {
    async fn click(&self) -> Result<()> {
        if self.fail_click {
            return Err(Error::ClickError(self.selector.clone()));
        }
        self.log.push(format!("click {}[{}]", self.selector, self.index));
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        if self.fail_attribute {
            return Err(Error::AttributeError(format!(
                "{}[{name}]: node detached",
                self.selector
            )));
        }
        Ok(self.attributes.get(name).cloned())
    }
}

/// A page described as selector -> list of per-element attributes.
#[derive(Default)]
pub(crate) struct FakePage {
    elements: HashMap<String, Vec<HashMap<String, String>>>,
    pub(crate) broken_clicks: Vec<String>,
    pub(crate) broken_attributes: Vec<String>,
    pub(crate) unreachable: bool,
    pub(crate) log: Rc<Log>,
}

impl FakePage {
    pub(crate) fn with(mut self, selector: &str, count: usize) -> Self {
        self.elements
            .insert(selector.to_owned(), vec![HashMap::new(); count]);
        self
    }

    pub(crate) fn with_link(mut self, selector: &str, href: &str) -> Self {
        let attrs = HashMap::from([("href".to_owned(), href.to_owned())]);
        self.elements.insert(selector.to_owned(), vec![attrs]);
        self
    }

    fn elements(&self, selector: &str) -> Vec<FakeElement> {
        self.elements
            .get(selector)
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, attributes)| FakeElement {
                selector: selector.to_owned(),
                index,
                attributes: attributes.clone(),
                fail_click: self.broken_clicks.iter().any(|s| s == selector),
                fail_attribute: self.broken_attributes.iter().any(|s| s == selector),
                log: Rc::clone(&self.log),
            })
            .collect()
    }
}

impl PageDriver for FakePage {
    type Element = FakeElement;

    async fn goto(&self, url: &str) -> Result<()> {
        if self.unreachable {
            return Err(Error::NavigationError(url.to_owned()));
        }
        self.log.push(format!("goto {url}"));
        Ok(())
    }

    async fn find_element(&self, selector: &str) -> Result<FakeElement> {
        self.elements(selector)
            .into_iter()
            .next()
            .ok_or_else(|| Error::ElementNotFound(selector.to_owned()))
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<FakeElement>> {
        Ok(self.elements(selector))
    }
}

/// A session over a `FakePage` that logs `close` into the page's log.
pub(crate) struct FakeSession {
    pub(crate) page: FakePage,
}

impl SessionDriver for FakeSession {
    type Page = FakePage;

    fn page(&self) -> &FakePage {
        &self.page
    }

    async fn close(self) {
        self.page.log.push("close".to_owned());
    }
}
