//! Wallet event data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::amount::Zatoshi;

/// Opaque transaction identifier, stable across refreshes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Paid { success: bool },
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

/// A transaction as seen by the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEvent {
    pub id: TransactionId,
    /// Absent while unconfirmed
    pub timestamp: Option<DateTime<Utc>>,
    pub amount: Zatoshi,
    #[serde(default)]
    pub fee: Option<Zatoshi>,
    pub status: TransactionStatus,
    pub direction: Direction,
    /// Counter-party address, when known
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub mined_height: Option<u64>,
}

impl WalletEvent {
    /// Blocks on top of the mining block, inclusive; zero while unmined
    pub fn confirmations(&self, latest_mined_height: u64) -> u64 {
        match self.mined_height {
            Some(height) if height <= latest_mined_height => latest_mined_height - height + 1,
            _ => 0,
        }
    }

    pub fn is_confirmed(&self, latest_mined_height: u64, required: u32) -> bool {
        self.confirmations(latest_mined_height) >= u64::from(required)
    }

    /// Address a memo reply should go to: the sender of a received event
    pub fn reply_address(&self) -> Option<&str> {
        match self.direction {
            Direction::Received => self.address.as_deref(),
            Direction::Sent => None,
        }
    }

    /// Link to this transaction on a block explorer rooted at `base`
    ///
    /// `base` should end with `/` so the id is appended rather than
    /// replacing the last path segment.
    pub fn explorer_url(&self, base: &str) -> Option<Url> {
        Url::parse(base).ok()?.join(self.id.as_str()).ok()
    }
}
