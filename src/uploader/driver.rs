use std::path::PathBuf;

use rand::seq::SliceRandom;
use tokio::sync::watch;
use tokio::time::{sleep, Duration};

use super::DocumentSender;
use crate::errors::AppResult;
use crate::scanner;

/// Fixed cooldown after a transient network failure.
pub const NETWORK_COOLDOWN: Duration = Duration::from_secs(60);
/// Recheck delay when the watched directory has no files yet.
pub const EMPTY_POOL_DELAY: Duration = Duration::from_secs(30);
/// Default wait between sends: 4 hours.
pub const DEFAULT_INTERVAL_SECS: u64 = 14400;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Root of the watched directory tree.
    pub root: PathBuf,
    /// Destination chat/channel, fixed for the process lifetime.
    pub chat_id: String,
    /// Wait between successive sends (repeating mode only).
    pub interval: Duration,
    /// When set, send exactly this file once and exit (one-shot mode).
    pub file: Option<PathBuf>,
}

/// Shuffles the pool uniformly and yields the first element. `None` on an
/// empty pool.
pub fn pick_random(pool: &mut [PathBuf]) -> Option<&PathBuf> {
    pool.shuffle(&mut rand::thread_rng());
    pool.first()
}

/// The loop driver: scan, select, send, wait.
///
/// One-shot mode sends the named file once and returns; no directory scan
/// happens at all. Repeating mode rebuilds the file pool from a fresh scan
/// on every iteration, so files added while the loop sleeps are picked up
/// next pass and a file that failed to send stays eligible.
///
/// Error policy: transient network failures log one diagnostic line and
/// restart the iteration after a fixed 60 second cooldown, indefinitely.
/// Everything else propagates to the caller unchanged. An empty pool is not
/// an error; the loop rechecks after a short delay.
///
/// All waits watch `shutdown` and return cleanly when it flips to true.
pub async fn run<S: DocumentSender>(
    sender: &S,
    config: &LoopConfig,
    mut shutdown: watch::Receiver<bool>,
) -> AppResult<()> {
    if let Some(file) = &config.file {
        sender.send_document(&config.chat_id, file).await?;
        log::info!("Sent {}, exiting", file.display());
        return Ok(());
    }

    loop {
        if *shutdown.borrow() {
            log::info!("Shutdown requested, stopping upload loop");
            return Ok(());
        }

        let mut pool = scanner::collect_files(&config.root)?;
        let Some(selected) = pick_random(&mut pool).cloned() else {
            log::warn!(
                "No files under {} yet, rechecking in {} seconds",
                config.root.display(),
                EMPTY_POOL_DELAY.as_secs()
            );
            if wait(EMPTY_POOL_DELAY, &mut shutdown).await {
                return Ok(());
            }
            continue;
        };

        match sender.send_document(&config.chat_id, &selected).await {
            Ok(()) => {
                log::info!("Sent {}", selected.display());
                if wait(config.interval, &mut shutdown).await {
                    return Ok(());
                }
            }
            Err(e) if e.is_transient() => {
                log::warn!(
                    "Network trouble sending {}: {}. Retrying in {} seconds",
                    selected.display(),
                    e,
                    NETWORK_COOLDOWN.as_secs()
                );
                if wait(NETWORK_COOLDOWN, &mut shutdown).await {
                    return Ok(());
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// Cancellable wait. Returns true if shutdown was requested.
async fn wait(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    if duration.is_zero() {
        return *shutdown.borrow();
    }
    tokio::select! {
        _ = sleep(duration) => false,
        _ = shutdown.changed() => true,
    }
}
