//! Wallet events
//!
//! - Event model (identity, timestamp, status, direction)
//! - The sorted, deduplicated collection the aggregator republishes

mod collection;
mod model;

pub use collection::WalletEventCollection;
pub use model::{Direction, TransactionId, TransactionStatus, WalletEvent};
