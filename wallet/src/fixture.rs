//! Fixture-backed synchronizer
//!
//! Stands in for the sync engine: wallet events come from a JSON file and
//! every subscription replays a short scan (`Scanning` steps, then `Synced`)
//! on a timer.

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use zwallet_nav::{SyncStatus, Synchronizer, WalletEvent, WalletNavError};

use crate::error::FixtureError;

#[derive(Debug, Clone)]
pub struct FixtureSynchronizer {
    events: Vec<WalletEvent>,
    scan_steps: u32,
    step_interval: Duration,
    height: u64,
}

impl FixtureSynchronizer {
    pub fn new(events: Vec<WalletEvent>) -> Self {
        // Report the chain tip as the highest mined event
        let height = events
            .iter()
            .filter_map(|event| event.mined_height)
            .max()
            .unwrap_or(0);

        Self {
            events,
            scan_steps: 0,
            step_interval: Duration::ZERO,
            height,
        }
    }

    /// Load a JSON array of wallet events
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let json = fs::read_to_string(path)?;
        let events: Vec<WalletEvent> = serde_json::from_str(&json)?;
        log::info!("Loaded {} wallet events from {}", events.len(), path.display());
        Ok(Self::new(events))
    }

    /// Emit `steps` scanning statuses `interval` apart before `Synced`
    pub fn with_scan_script(mut self, steps: u32, interval: Duration) -> Self {
        self.scan_steps = steps;
        self.step_interval = interval;
        self
    }

    pub fn with_height(mut self, height: u64) -> Self {
        self.height = height;
        self
    }

    pub fn events(&self) -> &[WalletEvent] {
        &self.events
    }
}

#[async_trait]
impl Synchronizer for FixtureSynchronizer {
    fn status_stream(&self) -> BoxStream<'static, SyncStatus> {
        let initial = if self.scan_steps == 0 {
            SyncStatus::Synced
        } else {
            SyncStatus::Scanning { progress: 0.0 }
        };
        let (tx, rx) = watch::channel(initial);

        let steps = self.scan_steps;
        let interval = self.step_interval;
        tokio::spawn(async move {
            for step in 1..=steps {
                tokio::time::sleep(interval).await;
                let status = if step == steps {
                    SyncStatus::Synced
                } else {
                    SyncStatus::Scanning {
                        progress: step as f32 / steps as f32,
                    }
                };
                if tx.send(status).is_err() {
                    return;
                }
            }
            // Hold the channel open until the subscriber goes away
            tx.closed().await;
        });

        WatchStream::new(rx).boxed()
    }

    fn latest_scanned_height(&self) -> u64 {
        self.height
    }

    async fn fetch_all_events(&self) -> Result<Vec<WalletEvent>, WalletNavError> {
        Ok(self.events.clone())
    }
}
