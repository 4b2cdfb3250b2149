use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Element, Tab};

use super::PageDriver;
use crate::model::{ElementError, ListingHandle, PageError};

/// `PageDriver` over one CDP tab. Handles are DOM node ids that get
/// re-attached per call; they stay valid only until the page mutates.
///
/// The underlying CDP calls block the worker thread. That is acceptable
/// here: the pipeline is strictly sequential and never issues two browser
/// calls at once.
pub struct ChromeDriver {
    tab: Arc<Tab>,
}

impl ChromeDriver {
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    fn element(&self, handle: ListingHandle) -> Result<Element<'_>, ElementError> {
        Element::new(self.tab.as_ref(), handle.node_id)
            .map_err(|e| ElementError::Interaction(format!("stale handle {}: {}", handle.node_id, e)))
    }
}

#[async_trait::async_trait]
impl PageDriver for ChromeDriver {
    async fn goto(&self, url: &str, timeout: Duration) -> Result<(), PageError> {
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| PageError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> bool {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .is_ok()
    }

    async fn find_handles(&self, selector: &str) -> Result<Vec<ListingHandle>, ElementError> {
        let elements = self
            .tab
            .find_elements(selector)
            .map_err(|e| ElementError::Read(format!("query `{selector}` failed: {e}")))?;
        Ok(elements
            .into_iter()
            .map(|element| ListingHandle { node_id: element.node_id })
            .collect())
    }

    async fn click(&self, handle: ListingHandle) -> Result<(), ElementError> {
        let element = self.element(handle)?;
        element
            .scroll_into_view()
            .and_then(|element| element.click())
            .map_err(|e| ElementError::Interaction(e.to_string()))?;
        Ok(())
    }

    async fn read_child_text(
        &self,
        handle: ListingHandle,
        selector: &str,
    ) -> Result<Option<String>, ElementError> {
        let element = self.element(handle)?;
        // A missing match surfaces as an error from the CDP layer;
        // absence is an expected outcome here, not a failure.
        let child = match element.find_element(selector) {
            Ok(child) => child,
            Err(_) => return Ok(None),
        };
        child
            .get_inner_text()
            .map(Some)
            .map_err(|e| ElementError::Read(e.to_string()))
    }

    async fn read_full_text(&self, handle: ListingHandle) -> Result<String, ElementError> {
        self.element(handle)?
            .get_inner_text()
            .map_err(|e| ElementError::Read(e.to_string()))
    }

    async fn page_html(&self) -> Result<String, ElementError> {
        self.tab
            .get_content()
            .map_err(|e| ElementError::Read(e.to_string()))
    }
}
