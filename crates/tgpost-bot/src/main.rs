//! Main entry point for tgpost.
//!
//! Usage: `tgpost <listing.json>...`. Each file holds one listing object or an
//! array of them.

use anyhow::{bail, Context};
use std::env;
use std::path::PathBuf;
use tgpost_bot::{read_listings, AdPublisher};
use tgpost_common::init_logging;
use tgpost_config::ConfigLoader;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: tgpost <listing.json>...");
    }

    let config = ConfigLoader::from_env()
        .load()
        .await
        .context("Failed to load configuration")?;

    // Held for the whole run so buffered log lines are flushed on exit.
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        chats = config.telegram.chat_ids.len(),
        "Starting tgpost"
    );

    let publisher = AdPublisher::from_config(&config)?;

    let mut published = 0usize;
    let mut failed = 0usize;
    for path in &paths {
        for listing in read_listings(path).await? {
            let report = publisher.publish(&listing).await;
            if report.all_delivered() {
                published += 1;
            } else {
                failed += 1;
            }
        }
    }

    if failed > 0 {
        warn!(published, failed, "Some listings were not delivered everywhere");
    } else {
        info!(published, "All listings published");
    }

    Ok(())
}
