use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::browser::PageDriver;
use crate::config::ScrapeConfig;

/// Terminal states of the load-more loop. Neither is an error: both
/// leave the page with whatever listings have rendered so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// The control disappeared, or the attempt bound was reached.
    Exhausted,
    /// The control was there but interacting with it was rejected.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderReport {
    pub state: LoaderState,
    pub clicks: u32,
}

/// Clicks the load-more control until it disappears, an interaction
/// fails, or `max_load_more_attempts` is reached. After each click the
/// loop settles for `settle_delay`; there is no completion signal for
/// the injected content, so the delay is an approximation.
pub async fn expand_listings(
    driver: &dyn PageDriver,
    config: &ScrapeConfig,
    cancel: &CancellationToken,
) -> LoaderReport {
    let mut clicks = 0;

    while clicks < config.max_load_more_attempts {
        if cancel.is_cancelled() {
            info!("Cancelled while expanding listings");
            break;
        }

        // Searching: a bounded wait; absence means exhaustion.
        if !driver
            .wait_for_selector(&config.load_more_selector, config.element_timeout())
            .await
        {
            info!("Load-more control not found after {} click(s)", clicks);
            return LoaderReport { state: LoaderState::Exhausted, clicks };
        }
        let handle = match driver.find_handles(&config.load_more_selector).await {
            Ok(handles) => match handles.first() {
                Some(&handle) => handle,
                None => {
                    return LoaderReport { state: LoaderState::Exhausted, clicks };
                }
            },
            Err(e) => {
                warn!("Load-more lookup failed: {:?}", e);
                return LoaderReport { state: LoaderState::Failed, clicks };
            }
        };

        // Clicking: the driver scrolls the control into view first.
        if let Err(e) = driver.click(handle).await {
            warn!("Load-more click failed: {:?}", e);
            return LoaderReport { state: LoaderState::Failed, clicks };
        }
        clicks += 1;
        debug!("Click {} on load-more control", clicks);

        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Cancelled during settle delay");
                break;
            }
            _ = sleep(config.settle_delay()) => {}
        }
    }

    info!("Finished loading additional listings after {} click(s)", clicks);
    LoaderReport { state: LoaderState::Exhausted, clicks }
}
