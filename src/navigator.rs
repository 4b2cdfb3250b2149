use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::browser::PageDriver;
use crate::config::ScrapeConfig;
use crate::model::PageError;

/// Navigates the tab to `url` and waits for the baseline listing
/// container to appear. Both failure modes are scoped to this URL; the
/// orchestrator moves on to the next one.
pub async fn open_listing_page(
    driver: &dyn PageDriver,
    url: &str,
    config: &ScrapeConfig,
) -> Result<(), PageError> {
    driver.goto(url, config.navigation_timeout()).await?;

    if !driver
        .wait_for_selector(&config.listing_selector, config.element_timeout())
        .await
    {
        dump_page_html(driver, url).await;
        return Err(PageError::ContentNotFound {
            url: url.to_string(),
            selector: config.listing_selector.clone(),
        });
    }

    Ok(())
}

/// Saves the current page HTML under logs/html/ when the expected
/// container is missing, so selector drift can be diagnosed offline.
async fn dump_page_html(driver: &dyn PageDriver, url: &str) {
    let html = match driver.page_html().await {
        Ok(html) => html,
        Err(e) => {
            warn!("Could not capture page HTML: {:?}", e);
            return;
        }
    };

    let folder = Path::new("logs/html");
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {}", e);
        return;
    }
    let slug: String = url
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let filename = folder.join(format!("debug-{}.html", slug));
    if let Err(e) = fs::write(&filename, html) {
        warn!("Failed to write debug HTML: {}", e);
    } else {
        info!("Saved debug HTML: {}", filename.display());
    }
}
