//! Common test doubles for navigation and wallet-event tests
//!
//! This module provides:
//! - Address validators with fixed answers
//! - A scriptable synchronizer (status streams, fetch results, fetch delay)
//! - Clipboard and URL opener doubles that record what they receive
//! - Wallet event builders
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::channel::mpsc;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

use zwallet_nav::{
    Clipboard, DeeplinkResolver, Direction, NavigationState, NavigationStateMachine,
    NetworkKind, PostInitRouter, RootDestination, SyncStatus, Synchronizer, TransactionId,
    TransactionStatus, UrlOpener, WalletEvent, WalletNavError, Zatoshi,
};

pub const T_ADDRESS: &str = "t1gXqfSSQt6WfpwyuCU3Wi7sSVZ66DYQ3Po";
pub const SEND_URI: &str =
    "zcash:///home/send?address=t1gXqfSSQt6WfpwyuCU3Wi7sSVZ66DYQ3Po&memo=hello&amount=123000000";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn accept_all(_: &str, _: NetworkKind) -> bool {
    true
}

pub fn reject_all(_: &str, _: NetworkKind) -> bool {
    false
}

pub fn resolver(accept: bool) -> DeeplinkResolver {
    if accept {
        DeeplinkResolver::new(NetworkKind::Mainnet, Arc::new(accept_all))
    } else {
        DeeplinkResolver::new(NetworkKind::Mainnet, Arc::new(reject_all))
    }
}

/// Router that always lands on `destination` after initialization
pub fn router_to(destination: RootDestination) -> Arc<dyn PostInitRouter> {
    Arc::new(move |_: &NavigationState| destination)
}

pub fn machine_with(state: NavigationState) -> NavigationStateMachine {
    NavigationStateMachine::with_state(state, resolver(true), router_to(RootDestination::Onboarding))
}

// ============================================================================
// Synchronizer double
// ============================================================================

pub struct MockSynchronizer {
    streams: Mutex<VecDeque<BoxStream<'static, SyncStatus>>>,
    events: Mutex<Result<Vec<WalletEvent>, WalletNavError>>,
    fetch_delay: Mutex<Duration>,
    fetch_count: AtomicUsize,
    subscribe_count: AtomicUsize,
    height: AtomicU64,
}

impl MockSynchronizer {
    pub fn new(events: Vec<WalletEvent>) -> Arc<Self> {
        Arc::new(Self {
            streams: Mutex::new(VecDeque::new()),
            events: Mutex::new(Ok(events)),
            fetch_delay: Mutex::new(Duration::ZERO),
            fetch_count: AtomicUsize::new(0),
            subscribe_count: AtomicUsize::new(0),
            height: AtomicU64::new(2_000_000),
        })
    }

    /// Next subscription yields exactly these statuses, then ends
    pub fn push_statuses(&self, statuses: Vec<SyncStatus>) {
        self.streams
            .lock()
            .unwrap()
            .push_back(stream::iter(statuses).boxed());
    }

    /// Next subscription is fed live through the returned sender
    pub fn push_channel(&self) -> mpsc::UnboundedSender<SyncStatus> {
        let (tx, rx) = mpsc::unbounded();
        self.streams.lock().unwrap().push_back(rx.boxed());
        tx
    }

    pub fn set_events(&self, result: Result<Vec<WalletEvent>, WalletNavError>) {
        *self.events.lock().unwrap() = result;
    }

    pub fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.lock().unwrap() = delay;
    }

    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn subscribe_count(&self) -> usize {
        self.subscribe_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Synchronizer for MockSynchronizer {
    fn status_stream(&self) -> BoxStream<'static, SyncStatus> {
        self.subscribe_count.fetch_add(1, Ordering::SeqCst);
        self.streams
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| stream::pending().boxed())
    }

    fn latest_scanned_height(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }

    async fn fetch_all_events(&self) -> Result<Vec<WalletEvent>, WalletNavError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        // Snapshot the result when the fetch is issued, not when it lands
        let result = self.events.lock().unwrap().clone();
        let delay = *self.fetch_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

// ============================================================================
// Platform doubles
// ============================================================================

#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn set_string(&self, text: &str) {
        self.copied.lock().unwrap().push(text.to_string());
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<Url>>,
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &Url) {
        self.opened.lock().unwrap().push(url.clone());
    }
}

// ============================================================================
// Event builders
// ============================================================================

/// Paid received event; `timestamp` in unix seconds
pub fn event(id: &str, timestamp: Option<i64>) -> WalletEvent {
    WalletEvent {
        id: TransactionId::new(id),
        timestamp: timestamp.and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        amount: Zatoshi(25),
        fee: Some(Zatoshi(10)),
        status: TransactionStatus::Paid { success: true },
        direction: Direction::Received,
        address: Some(T_ADDRESS.to_string()),
        memo: None,
        mined_height: Some(1_000_000),
    }
}

pub fn ids(events: &zwallet_nav::WalletEventCollection) -> Vec<String> {
    events.ids().map(|id| id.to_string()).collect()
}
