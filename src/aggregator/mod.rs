//! Wallet event aggregation
//!
//! - Reducer: status handling, fetch bookkeeping, selection, leave-app prompt
//! - Actor: throttled subscription and fetch tasks feeding one mailbox

mod actor;
mod reducer;

pub use actor::AggregatorHandle;
pub use reducer::{
    AggregatorAction, AggregatorEffect, EventsListMode, FetchToken, WalletEventAggregator,
    WalletEventsState,
};
