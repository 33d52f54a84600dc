//! zwallet-nav: navigation core of a shielded wallet client
//!
//! Two inputs drive navigation: `zcash:` deep links handed over by the OS
//! and the status stream of the wallet synchronizer. This crate holds the
//! logic that sits between them and the screens.
//!
//! # Architecture
//!
//! - **Deeplink resolver**: parses an untrusted URI into a typed [`Destination`],
//!   validating payment fields through an injected [`AddressValidator`]
//! - **Navigation state machine**: applies, queues or rejects destinations
//!   depending on app initialization, and prefills the send flow
//! - **Wallet event aggregator**: throttles synchronizer statuses, fetches the
//!   full event set on reaching `Synced` and republishes it sorted and
//!   deduplicated
//!
//! Both stateful components run as single-task actors processing a mailbox
//! in order. Collaborators (synchronizer, clipboard, URL opener, address
//! validator, post-initialization router) are passed in by the caller.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use zwallet_nav::*;
//!
//! let config = NavConfig::from_env();
//! let resolver = DeeplinkResolver::new(config.network, Arc::new(StructuralAddressValidator::new()));
//! let router = Arc::new(|_: &NavigationState| RootDestination::Tabs);
//! let navigation = NavigationHandle::spawn(NavigationStateMachine::new(resolver, router));
//!
//! navigation.send(NavigationEvent::DeeplinkReceived("zcash:///home".into()))?;
//! navigation.send(NavigationEvent::AppInitialization(AppInitializationState::Initialized))?;
//! ```

pub mod address;
pub mod aggregator;
pub mod amount;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod events;
pub mod navigation;
pub mod network;
pub mod platform;
pub mod send;
pub mod synchronizer;
pub mod throttle;

// Re-exports for convenience
pub use address::{AddressValidator, StructuralAddressValidator};
pub use aggregator::{
    AggregatorAction, AggregatorEffect, AggregatorHandle, EventsListMode, FetchToken,
    WalletEventAggregator, WalletEventsState,
};
pub use amount::Zatoshi;
pub use config::NavConfig;
pub use deeplink::{resolve_deeplink, DeeplinkResolver, Destination, DEEPLINK_SCHEME};
pub use error::{DeeplinkError, WalletNavError};
pub use events::{Direction, TransactionId, TransactionStatus, WalletEvent, WalletEventCollection};
pub use navigation::{
    AppInitializationState, NavigationEffect, NavigationEvent, NavigationHandle, NavigationState,
    NavigationStateMachine, PostInitRouter, RootDestination, Tab, TabsState,
};
pub use network::NetworkKind;
pub use platform::{Clipboard, UrlOpener};
pub use send::{MemoState, SendFlowState};
pub use synchronizer::{SyncStatus, Synchronizer};
pub use throttle::{throttle_latest, ThrottleLatest};

// Common result type
pub type Result<T> = std::result::Result<T, WalletNavError>;
