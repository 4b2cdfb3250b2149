mod browser;
mod config;
mod extractor;
mod filter;
mod loader;
mod model;
mod navigator;
mod normalizer;
mod orchestrator;
mod sink;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use config::load_config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} with {} target URL(s)",
        config_path,
        config.target_urls.len()
    );

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, finishing up...");
            signal_cancel.cancel();
        }
    });

    match orchestrator::execute(&config, &cancel).await {
        Ok(report) => {
            info!("Total jobs collected: {}", report.accepted.len());
            if !report.written {
                error!("Output could not be written to {}", config.output_path);
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            std::process::exit(1);
        }
    }
}
