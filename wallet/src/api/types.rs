use serde::{Deserialize, Serialize};
use zwallet_nav::{
    AppInitializationState, EventsListMode, NavigationEffect, NavigationState, SyncStatus,
    WalletEvent,
};

#[derive(Debug, Deserialize, Serialize)]
pub struct DeeplinkRequest {
    pub uri: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InitializationRequest {
    pub state: AppInitializationState,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub state: NavigationState,
    pub effects: Vec<NavigationEffect>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ShowListRequest {
    pub mode: EventsListMode,
}

/// Which part of an event the copy action puts on the clipboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyField {
    #[default]
    Id,
    Address,
    Memo,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CopyRequest {
    #[serde(default)]
    pub field: CopyField,
}

/// Wallet event plus the values derived from the current chain height
#[derive(Debug, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: WalletEvent,
    pub confirmations: u64,
    pub confirmed: bool,
    pub reply_address: Option<String>,
    pub explorer_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub subscribed: bool,
    pub status: Option<SyncStatus>,
    pub latest_mined_height: Option<u64>,
    pub required_confirmations: u32,
    pub list_mode: EventsListMode,
    pub total: usize,
    pub events: Vec<EventView>,
    pub selected: Option<EventView>,
    /// URL waiting for the leave-app confirmation
    pub leave_app_prompt: Option<String>,
    pub last_fetch_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClipboardResponse {
    pub contents: Option<String>,
    pub opened_urls: Vec<String>,
}
