//! Scripted in-memory `PageDriver` used by the unit tests. Pages are
//! keyed by URL; `goto` makes a working copy so load-more clicks can
//! mutate the rendered listing set.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::PageDriver;
use crate::config::{FieldSelectors, ScrapeConfig};
use crate::model::{ElementError, ListingHandle, PageError};

pub const LISTING_SELECTOR: &str = ".job-item";
pub const TITLE_SELECTOR: &str = ".job-title";
pub const LOCATION_SELECTOR: &str = ".job-location";
pub const DESCRIPTION_SELECTOR: &str = ".job-description";
pub const REQUIREMENTS_SELECTOR: &str = ".job-requirements";
pub const LOAD_MORE_SELECTOR: &str = "button.load-more";

const LOAD_MORE_NODE: u32 = 9_000;

/// A `ScrapeConfig` wired to the fake's selectors, with zero delays so
/// tests run instantly.
pub fn test_config(urls: &[&str]) -> ScrapeConfig {
    ScrapeConfig {
        target_urls: urls.iter().map(|url| url.to_string()).collect(),
        listing_selector: LISTING_SELECTOR.to_string(),
        selectors: FieldSelectors {
            title: TITLE_SELECTOR.to_string(),
            location: LOCATION_SELECTOR.to_string(),
            description: DESCRIPTION_SELECTOR.to_string(),
            requirements: REQUIREMENTS_SELECTOR.to_string(),
        },
        load_more_selector: LOAD_MORE_SELECTOR.to_string(),
        max_load_more_attempts: 5,
        settle_delay_ms: 0,
        expand_delay_ms: 0,
        navigation_timeout_ms: 1_000,
        element_timeout_ms: 100,
        target_keywords: vec!["Junior".to_string()],
        exclude_keywords: vec!["Full-time".to_string()],
        output_path: "jobs.json".to_string(),
        headless: true,
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeListing {
    fields: HashMap<String, String>,
    pub full_text: String,
    /// Every read of this listing fails hard.
    pub broken: bool,
    /// The expand click on this listing is rejected.
    pub fail_click: bool,
}

impl FakeListing {
    pub fn with_fields(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(selector, text)| (selector.to_string(), text.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// A listing whose title/description pass the default `test_config`
    /// filter.
    pub fn relevant(title: &str) -> Self {
        Self::with_fields(&[
            (TITLE_SELECTOR, title),
            (DESCRIPTION_SELECTOR, "Junior position, no experience needed"),
        ])
    }

    pub fn failing() -> Self {
        Self {
            broken: true,
            fail_click: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakePage {
    pub container_present: bool,
    pub listings: Vec<FakeListing>,
    /// Successful load-more clicks remaining before the control
    /// disappears.
    pub load_more_rounds: u32,
    /// Listings appended after each successful load-more click.
    pub added_per_click: Vec<FakeListing>,
    /// The load-more control is present but clicking it is rejected.
    pub fail_load_more_click: bool,
    /// `goto` for this URL fails with a navigation error.
    pub navigation_fails: bool,
}

impl FakePage {
    pub fn with_listings(listings: Vec<FakeListing>) -> Self {
        Self {
            container_present: true,
            listings,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            navigation_fails: true,
            ..Default::default()
        }
    }
}

struct State {
    pages: HashMap<String, FakePage>,
    current: Option<FakePage>,
}

pub struct FakeDriver {
    state: Mutex<State>,
}

impl FakeDriver {
    pub fn new(pages: Vec<(&str, FakePage)>) -> Self {
        Self {
            state: Mutex::new(State {
                pages: pages
                    .into_iter()
                    .map(|(url, page)| (url.to_string(), page))
                    .collect(),
                current: None,
            }),
        }
    }

    /// Driver for a single page already navigated to, for tests that
    /// exercise one component below the orchestrator.
    pub async fn on_page(page: FakePage) -> Self {
        let driver = Self::new(vec![("http://test/", page)]);
        driver
            .goto("http://test/", Duration::from_secs(1))
            .await
            .expect("fake navigation");
        driver
    }
}

#[async_trait::async_trait]
impl PageDriver for FakeDriver {
    async fn goto(&self, url: &str, _timeout: Duration) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        let page = state.pages.get(url).cloned().ok_or_else(|| PageError::Navigation {
            url: url.to_string(),
            reason: "unreachable host".to_string(),
        })?;
        if page.navigation_fails {
            state.current = None;
            return Err(PageError::Navigation {
                url: url.to_string(),
                reason: "timeout".to_string(),
            });
        }
        state.current = Some(page);
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, _timeout: Duration) -> bool {
        let state = self.state.lock().unwrap();
        let Some(page) = &state.current else {
            return false;
        };
        match selector {
            LISTING_SELECTOR => page.container_present,
            LOAD_MORE_SELECTOR => page.fail_load_more_click || page.load_more_rounds > 0,
            _ => false,
        }
    }

    async fn find_handles(&self, selector: &str) -> Result<Vec<ListingHandle>, ElementError> {
        let state = self.state.lock().unwrap();
        let Some(page) = &state.current else {
            return Ok(Vec::new());
        };
        match selector {
            LISTING_SELECTOR if page.container_present => Ok((0..page.listings.len())
                .map(|index| ListingHandle { node_id: index as u32 })
                .collect()),
            LOAD_MORE_SELECTOR if page.fail_load_more_click || page.load_more_rounds > 0 => {
                Ok(vec![ListingHandle { node_id: LOAD_MORE_NODE }])
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn click(&self, handle: ListingHandle) -> Result<(), ElementError> {
        let mut state = self.state.lock().unwrap();
        let Some(page) = state.current.as_mut() else {
            return Err(ElementError::Interaction("no page open".to_string()));
        };

        if handle.node_id == LOAD_MORE_NODE {
            if page.fail_load_more_click {
                return Err(ElementError::Interaction("click rejected".to_string()));
            }
            if page.load_more_rounds == 0 {
                return Err(ElementError::Interaction("control is gone".to_string()));
            }
            page.load_more_rounds -= 1;
            let added = page.added_per_click.clone();
            page.listings.extend(added);
            return Ok(());
        }

        let listing = page
            .listings
            .get(handle.node_id as usize)
            .ok_or_else(|| ElementError::Interaction("stale handle".to_string()))?;
        if listing.broken || listing.fail_click {
            return Err(ElementError::Interaction("click rejected".to_string()));
        }
        Ok(())
    }

    async fn read_child_text(
        &self,
        handle: ListingHandle,
        selector: &str,
    ) -> Result<Option<String>, ElementError> {
        let state = self.state.lock().unwrap();
        let listing = state
            .current
            .as_ref()
            .and_then(|page| page.listings.get(handle.node_id as usize))
            .ok_or_else(|| ElementError::Read("stale handle".to_string()))?;
        if listing.broken {
            return Err(ElementError::Read("read failure".to_string()));
        }
        Ok(listing.fields.get(selector).cloned())
    }

    async fn read_full_text(&self, handle: ListingHandle) -> Result<String, ElementError> {
        let state = self.state.lock().unwrap();
        let listing = state
            .current
            .as_ref()
            .and_then(|page| page.listings.get(handle.node_id as usize))
            .ok_or_else(|| ElementError::Read("stale handle".to_string()))?;
        if listing.broken {
            return Err(ElementError::Read("read failure".to_string()));
        }
        Ok(listing.full_text.clone())
    }

    async fn page_html(&self) -> Result<String, ElementError> {
        Ok("<html><body></body></html>".to_string())
    }
}
