use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::browser::chrome::ChromeDriver;
use crate::browser::session::Session;
use crate::browser::PageDriver;
use crate::config::ScrapeConfig;
use crate::extractor;
use crate::filter;
use crate::loader::{self, LoaderState};
use crate::model::{JobListing, SessionError};
use crate::navigator;
use crate::sink;

pub struct RunReport {
    pub accepted: Vec<JobListing>,
    pub written: bool,
}

/// Runs the whole pipeline: acquires the browser session, collects
/// records across all configured URLs, then flushes the sink and releases
/// the session. The last two happen unconditionally, however collection
/// went.
pub async fn execute(
    config: &ScrapeConfig,
    cancel: &CancellationToken,
) -> Result<RunReport, SessionError> {
    let session = match Session::acquire(config) {
        Ok(session) => session,
        Err(e) => {
            error!("Browser acquisition failed: {}", e);
            // Still produce an output document, so an aborted run and an
            // empty run look the same to downstream consumers.
            flush(config, &[]);
            return Err(e);
        }
    };

    let driver = ChromeDriver::new(session.tab());
    let accepted = collect(&driver, config, cancel).await;

    let written = flush(config, &accepted);
    session.release();

    Ok(RunReport { accepted, written })
}

fn flush(config: &ScrapeConfig, records: &[JobListing]) -> bool {
    match sink::write_records(&config.output_path, records) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                "Result write failed, {} record(s) kept in memory: {}",
                records.len(),
                e
            );
            false
        }
    }
}

/// Sequential per-URL pipeline: Navigate, expand via the loader,
/// enumerate once, then extract and filter listing by listing. URL-level
/// failures skip to the next URL; listing-level failures never abort the
/// loop.
pub async fn collect(
    driver: &dyn PageDriver,
    config: &ScrapeConfig,
    cancel: &CancellationToken,
) -> Vec<JobListing> {
    let mut accepted = Vec::new();

    for url in &config.target_urls {
        if cancel.is_cancelled() {
            info!("Run cancelled before {}", url);
            break;
        }
        info!("Processing URL: {}", url);

        if let Err(e) = navigator::open_listing_page(driver, url, config).await {
            warn!("Skipping {}: {}", url, e);
            continue;
        }

        let report = loader::expand_listings(driver, config, cancel).await;
        if report.state == LoaderState::Failed {
            info!(
                "Load-more interaction failed after {} click(s); extracting what rendered",
                report.clicks
            );
        }

        // Snapshot the rendered listings exactly once, after the loader
        // reached a terminal state. Handles from before the load-more
        // clicks would be stale.
        let handles = match driver.find_handles(&config.listing_selector).await {
            Ok(handles) => handles,
            Err(e) => {
                warn!("Listing enumeration failed on {}: {:?}", url, e);
                continue;
            }
        };
        info!("Found {} listing(s) on page", handles.len());

        for (index, handle) in handles.iter().enumerate() {
            if cancel.is_cancelled() {
                info!("Run cancelled at listing {} of this page", index + 1);
                break;
            }

            let listing = extractor::extract(driver, *handle, config).await;
            if filter::is_relevant(&listing, &config.target_keywords, &config.exclude_keywords) {
                info!("Accepted: {}", listing.title);
                accepted.push(listing);
            } else if listing.title.is_empty() {
                debug!("Filtered out listing {} (no usable fields)", index + 1);
            } else {
                debug!("Filtered out: {}", listing.title);
            }
        }
    }

    info!("Total records collected: {}", accepted.len());
    accepted
}
