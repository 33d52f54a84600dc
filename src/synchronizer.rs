//! Synchronizer collaborator
//!
//! The sync engine itself lives elsewhere; this crate only consumes its
//! status stream and query results.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::error::WalletNavError;
use crate::events::WalletEvent;

/// Status reported by the synchronizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncStatus {
    Stopped,
    Scanning { progress: f32 },
    /// Steady state: the local view of the chain is caught up
    Synced,
    Error { message: String },
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }
}

#[async_trait]
pub trait Synchronizer: Send + Sync {
    /// Live status stream; a fresh subscription per call
    fn status_stream(&self) -> BoxStream<'static, SyncStatus>;

    fn latest_scanned_height(&self) -> u64;

    /// Complete event set in one shot
    async fn fetch_all_events(&self) -> Result<Vec<WalletEvent>, WalletNavError>;
}
