use std::ffi::OsStr;
use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info};

use crate::config::ScrapeConfig;
use crate::model::SessionError;

/// Owns the lifetime of one Chrome process and its single tab. Exactly
/// one session exists per run; dropping it terminates the process, so
/// teardown happens on every exit path.
pub struct Session {
    // Keeps the Chrome process alive for as long as the session exists.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl Session {
    pub fn acquire(config: &ScrapeConfig) -> Result<Self, SessionError> {
        info!("Launching browser (headless: {})", config.headless);
        let browser = Browser::new(LaunchOptions {
            headless: config.headless,
            sandbox: false,
            window_size: Some((1200, 800)),
            args: vec![OsStr::new("--disable-gpu")],
            ..Default::default()
        })
        .map_err(|e| SessionError::Launch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| SessionError::OpenTab(e.to_string()))?;
        tab.set_default_timeout(config.navigation_timeout());

        Ok(Self { _browser: browser, tab })
    }

    /// The single open tab. No second tab is ever created; click and
    /// scroll state is only well-defined for the active one.
    pub fn tab(&self) -> Arc<Tab> {
        self.tab.clone()
    }

    /// Terminates the browser. Equivalent to dropping the session; this
    /// form exists so teardown shows up in the logs.
    pub fn release(self) {
        debug!("Releasing browser session");
        drop(self);
    }
}
