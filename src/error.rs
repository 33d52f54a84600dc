//! Error types for deep-link resolution and wallet-event aggregation
//!
//! Every failure in this crate is non-fatal and representable as a typed
//! result. Deep-link errors leave navigation untouched; fetch failures leave
//! the current event collection intact.

use serde::Serialize;
use thiserror::Error;

/// Reasons a deep-link URI cannot be turned into a [`Destination`](crate::Destination)
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum DeeplinkError {
    /// Wrong scheme, unknown path, or not a URI at all
    #[error("Unrecognized deeplink: {0}")]
    UnrecognizedDeeplink(String),

    /// `amount` is missing or not a non-negative integer of zatoshi
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// `address` is missing or rejected by the address validator
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// Core error type for the navigation and event-aggregation layer
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum WalletNavError {
    #[error("Deeplink error: {0}")]
    Deeplink(#[from] DeeplinkError),

    /// The synchronizer could not return the event set
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The actor behind a handle has shut down
    #[error("{0} actor stopped")]
    ActorStopped(&'static str),
}

impl WalletNavError {
    /// Create a fetch failed error
    pub fn fetch_failed(msg: impl Into<String>) -> Self {
        Self::FetchFailed(msg.into())
    }
}
