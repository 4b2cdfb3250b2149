use tokio::time::sleep;
use tracing::{debug, warn};

use crate::browser::PageDriver;
use crate::config::ScrapeConfig;
use crate::model::{JobListing, ListingHandle};
use crate::normalizer;

/// Extracts one listing into a record. Every step tolerates failure: a
/// field that cannot be read stays empty and a record is always returned,
/// so one bad listing never aborts the batch.
pub async fn extract(
    driver: &dyn PageDriver,
    handle: ListingHandle,
    config: &ScrapeConfig,
) -> JobListing {
    let selectors = &config.selectors;

    let title = read_field(driver, handle, &selectors.title).await;

    // Expand the listing so the detail fields render. If the click is
    // rejected we read whatever is already visible.
    match driver.click(handle).await {
        Ok(()) => sleep(config.expand_delay()).await,
        Err(e) => debug!("Could not expand listing: {:?}", e),
    }

    let location = read_field(driver, handle, &selectors.location).await;
    let description = read_field(driver, handle, &selectors.description).await;
    let requirements = read_field(driver, handle, &selectors.requirements).await;

    let mut listing = JobListing { title, location, description, requirements };

    if listing.description.is_empty() || listing.requirements.is_empty() {
        apply_text_fallback(driver, handle, &mut listing).await;
    }

    normalizer::normalize(listing)
}

async fn read_field(driver: &dyn PageDriver, handle: ListingHandle, selector: &str) -> String {
    match driver.read_child_text(handle, selector).await {
        Ok(Some(text)) => text,
        Ok(None) => String::new(),
        Err(e) => {
            warn!("Read of `{}` failed: {:?}", selector, e);
            String::new()
        }
    }
}

/// Positional heuristic over the listing's visible text, used when the
/// structured selectors came up empty. Line 0 is taken to be the title
/// line; lines 1 and 2 stand in for description and requirements. Best
/// effort only, fragile against markup changes by nature.
async fn apply_text_fallback(
    driver: &dyn PageDriver,
    handle: ListingHandle,
    listing: &mut JobListing,
) {
    let text = match driver.read_full_text(handle).await {
        Ok(text) => text,
        Err(e) => {
            debug!("Fallback text read failed: {:?}", e);
            return;
        }
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > 2 && listing.description.is_empty() {
        listing.description = lines[1].to_string();
    }
    if lines.len() > 3 && listing.requirements.is_empty() {
        listing.requirements = lines[2].to_string();
    }
}
