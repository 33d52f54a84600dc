//! Wallet event aggregation logic
//!
//! All mutation of [`WalletEventsState`] happens in
//! [`WalletEventAggregator::reduce`], one action per turn. Asynchronous work
//! (the throttled status subscription and the event fetch) is requested
//! through [`AggregatorEffect`]s which the actor runtime executes; their
//! results come back as actions stamped with the epoch they were issued in.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::NavConfig;
use crate::error::WalletNavError;
use crate::events::{TransactionId, WalletEvent, WalletEventCollection};
use crate::platform::{Clipboard, UrlOpener};
use crate::synchronizer::{SyncStatus, Synchronizer};

/// Identifies one fetch request
///
/// `epoch` changes on every start/stop; `seq` orders fetches inside an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchToken {
    pub epoch: u64,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventsListMode {
    #[default]
    Latest,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorAction {
    Start,
    Stop,
    StatusChanged {
        epoch: u64,
        status: SyncStatus,
    },
    EventsFetched {
        token: FetchToken,
        result: Result<Vec<WalletEvent>, WalletNavError>,
    },
    SelectEvent(TransactionId),
    ClearSelection,
    ShowList(EventsListMode),
    /// Raise the leave-app confirmation; nothing is opened yet
    RequestExternalOpen(Url),
    ConfirmOpen,
    DismissPrompt,
    CopyEventDetail(String),
}

/// Asynchronous work requested by a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregatorEffect {
    /// Replace any live subscription with a throttled one tagged `epoch`
    Subscribe { epoch: u64 },
    Unsubscribe,
    FetchEvents(FetchToken),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletEventsState {
    pub subscribed: bool,
    pub epoch: u64,
    pub last_status: Option<SyncStatus>,
    pub latest_mined_height: Option<u64>,
    pub required_confirmations: u32,
    pub events: WalletEventCollection,
    pub list_mode: EventsListMode,
    pub selected: Option<TransactionId>,
    /// URL awaiting confirmation before leaving the app
    pub leave_app_prompt: Option<Url>,
    pub last_fetch_error: Option<WalletNavError>,
    /// Sequence number of the most recently issued fetch
    pub fetch_seq: u64,
}

impl WalletEventsState {
    pub fn new(required_confirmations: u32) -> Self {
        Self {
            subscribed: false,
            epoch: 0,
            last_status: None,
            latest_mined_height: None,
            required_confirmations,
            events: WalletEventCollection::new(),
            list_mode: EventsListMode::default(),
            selected: None,
            leave_app_prompt: None,
            last_fetch_error: None,
            fetch_seq: 0,
        }
    }

    pub fn selected_event(&self) -> Option<&WalletEvent> {
        self.selected.as_ref().and_then(|id| self.events.get(id))
    }
}

pub struct WalletEventAggregator {
    state: WalletEventsState,
    synchronizer: Arc<dyn Synchronizer>,
    clipboard: Arc<dyn Clipboard>,
    opener: Arc<dyn UrlOpener>,
    throttle_interval: Duration,
}

impl WalletEventAggregator {
    pub fn new(
        synchronizer: Arc<dyn Synchronizer>,
        clipboard: Arc<dyn Clipboard>,
        opener: Arc<dyn UrlOpener>,
        config: &NavConfig,
    ) -> Self {
        Self {
            state: WalletEventsState::new(config.required_confirmations),
            synchronizer,
            clipboard,
            opener,
            throttle_interval: config.throttle_interval,
        }
    }

    pub fn state(&self) -> &WalletEventsState {
        &self.state
    }

    pub fn throttle_interval(&self) -> Duration {
        self.throttle_interval
    }

    pub(crate) fn synchronizer(&self) -> Arc<dyn Synchronizer> {
        self.synchronizer.clone()
    }

    /// Apply one action and return the asynchronous work it requires
    pub fn reduce(&mut self, action: AggregatorAction) -> Vec<AggregatorEffect> {
        match action {
            AggregatorAction::Start => {
                // A restart cancels the previous subscription and anything it started
                self.state.epoch += 1;
                self.state.subscribed = true;
                log::debug!("Wallet events subscription started (epoch {})", self.state.epoch);
                vec![AggregatorEffect::Subscribe {
                    epoch: self.state.epoch,
                }]
            }
            AggregatorAction::Stop => {
                self.state.epoch += 1;
                self.state.subscribed = false;
                log::debug!("Wallet events subscription stopped (epoch {})", self.state.epoch);
                vec![AggregatorEffect::Unsubscribe]
            }
            AggregatorAction::StatusChanged { epoch, status } => self.on_status(epoch, status),
            AggregatorAction::EventsFetched { token, result } => {
                self.on_events_fetched(token, result);
                Vec::new()
            }
            AggregatorAction::SelectEvent(id) => {
                if self.state.events.contains(&id) {
                    self.state.selected = Some(id);
                } else {
                    log::warn!("Cannot select unknown wallet event {}", id);
                }
                Vec::new()
            }
            AggregatorAction::ClearSelection => {
                self.state.selected = None;
                Vec::new()
            }
            AggregatorAction::ShowList(mode) => {
                self.state.list_mode = mode;
                self.state.selected = None;
                Vec::new()
            }
            AggregatorAction::RequestExternalOpen(url) => {
                self.state.leave_app_prompt = Some(url);
                Vec::new()
            }
            AggregatorAction::ConfirmOpen => {
                match self.state.leave_app_prompt.take() {
                    Some(url) => {
                        log::info!("Opening {} outside the app", url);
                        self.opener.open_url(&url);
                    }
                    None => log::debug!("Confirm without a pending prompt ignored"),
                }
                Vec::new()
            }
            AggregatorAction::DismissPrompt => {
                self.state.leave_app_prompt = None;
                Vec::new()
            }
            AggregatorAction::CopyEventDetail(text) => {
                self.clipboard.set_string(&text);
                Vec::new()
            }
        }
    }

    fn on_status(&mut self, epoch: u64, status: SyncStatus) -> Vec<AggregatorEffect> {
        if !self.state.subscribed || epoch != self.state.epoch {
            log::debug!(
                "Discarding status {:?} from epoch {} (current {})",
                status,
                epoch,
                self.state.epoch
            );
            return Vec::new();
        }

        log::debug!("Synchronizer status: {:?}", status);
        let synced = status.is_synced();
        self.state.last_status = Some(status);

        if !synced {
            return Vec::new();
        }

        let height = self.synchronizer.latest_scanned_height();
        self.state.latest_mined_height = Some(height);
        self.state.fetch_seq += 1;

        let token = FetchToken {
            epoch: self.state.epoch,
            seq: self.state.fetch_seq,
        };
        log::debug!("Synced at height {}, fetching wallet events ({:?})", height, token);
        vec![AggregatorEffect::FetchEvents(token)]
    }

    fn on_events_fetched(
        &mut self,
        token: FetchToken,
        result: Result<Vec<WalletEvent>, WalletNavError>,
    ) {
        // Only the latest fetch of the live epoch may touch the collection
        if token.epoch != self.state.epoch || token.seq != self.state.fetch_seq {
            log::debug!(
                "Discarding stale fetch {:?} (epoch {}, seq {})",
                token,
                self.state.epoch,
                self.state.fetch_seq
            );
            return;
        }

        match result {
            Ok(events) => {
                let fetched = events.len();
                let rebuilt = WalletEventCollection::rebuild(events);
                log::info!(
                    "Wallet events refreshed: {} fetched, {} unique",
                    fetched,
                    rebuilt.len()
                );

                self.state.events = rebuilt;
                self.state.last_fetch_error = None;

                if let Some(selected) = &self.state.selected {
                    if !self.state.events.contains(selected) {
                        log::debug!("Selected event {} no longer present, clearing", selected);
                        self.state.selected = None;
                    }
                }
            }
            Err(e) => {
                log::warn!("Wallet events fetch failed, keeping previous collection: {}", e);
                self.state.last_fetch_error = Some(e);
            }
        }
    }
}
