/// App Manager - Orchestration Layer
///
/// Owns the navigation and wallet-event actors and translates API calls into
/// their events and actions.
use std::sync::Arc;
use zwallet_nav::{
    AggregatorAction, AggregatorHandle, AppInitializationState, DeeplinkResolver,
    EventsListMode, NavigationEffect, NavigationEvent, NavigationHandle, NavigationState,
    NavigationStateMachine, RootDestination, StructuralAddressValidator, Synchronizer,
    TransactionId, WalletEvent, WalletEventAggregator, WalletEventsState,
};

use crate::api::types::{
    ClipboardResponse, CopyField, EventView, EventsResponse, NavigationResponse,
};
use crate::config::HostConfig;
use crate::error::HostError;
use crate::fixture::FixtureSynchronizer;
use crate::platform::{MemoryClipboard, RecordingUrlOpener};

/// Events shown by the "latest" list
pub const LATEST_EVENTS_COUNT: usize = 5;

pub struct AppManager {
    pub config: HostConfig,
    navigation: NavigationHandle,
    events: AggregatorHandle,
    clipboard: Arc<MemoryClipboard>,
    opener: Arc<RecordingUrlOpener>,
}

impl AppManager {
    // ============================================================================
    // Constructor
    // ============================================================================

    /// Build the app from configuration; must be called within a tokio runtime
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let synchronizer = match &config.events_fixture {
            Some(path) => FixtureSynchronizer::from_file(path)?,
            None => FixtureSynchronizer::new(Vec::new()),
        }
        .with_scan_script(config.scan_steps, config.scan_step_interval);

        Ok(Self::with_synchronizer(config, Arc::new(synchronizer)))
    }

    /// Build the app around an explicit synchronizer (for testing)
    pub fn with_synchronizer(config: HostConfig, synchronizer: Arc<dyn Synchronizer>) -> Self {
        // A configured fixture stands for an existing wallet
        let has_wallet = config.events_fixture.is_some();
        let router = Arc::new(move |_: &NavigationState| {
            if has_wallet {
                RootDestination::Tabs
            } else {
                RootDestination::Onboarding
            }
        });

        let resolver = DeeplinkResolver::new(
            config.nav.network,
            Arc::new(StructuralAddressValidator::new()),
        );
        let machine = NavigationStateMachine::new(resolver, router)
            .with_memo_char_limit(config.nav.memo_char_limit);
        let navigation = NavigationHandle::spawn(machine);

        let clipboard = Arc::new(MemoryClipboard::new());
        let opener = Arc::new(RecordingUrlOpener::new());
        let events = WalletEventAggregator::new(
            synchronizer,
            clipboard.clone(),
            opener.clone(),
            &config.nav,
        )
        .spawn();

        Self {
            config,
            navigation,
            events,
            clipboard,
            opener,
        }
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    pub fn navigation_state(&self) -> NavigationState {
        self.navigation.state()
    }

    pub async fn handle_deeplink(&self, uri: &str) -> Result<NavigationResponse, HostError> {
        let effects = self
            .navigation
            .dispatch(NavigationEvent::DeeplinkReceived(uri.to_string()))
            .await?;

        if let Some(NavigationEffect::DeeplinkRejected { error }) = effects
            .iter()
            .find(|effect| matches!(effect, NavigationEffect::DeeplinkRejected { .. }))
        {
            return Err(HostError::Deeplink(error.clone()));
        }

        Ok(self.navigation_response(effects))
    }

    pub async fn set_initialization(
        &self,
        state: AppInitializationState,
    ) -> Result<NavigationResponse, HostError> {
        let effects = self
            .navigation
            .dispatch(NavigationEvent::AppInitialization(state))
            .await?;
        Ok(self.navigation_response(effects))
    }

    pub async fn show_debug_menu(&self) -> Result<NavigationResponse, HostError> {
        let effects = self.navigation.dispatch(NavigationEvent::ShowDebugMenu).await?;
        Ok(self.navigation_response(effects))
    }

    pub async fn back_to_tabs(&self) -> Result<NavigationResponse, HostError> {
        let effects = self
            .navigation
            .dispatch(NavigationEvent::GoToDestination(RootDestination::Tabs))
            .await?;

        if effects
            .iter()
            .any(|effect| matches!(effect, NavigationEffect::ShortcutUnavailable { .. }))
        {
            return Err(HostError::ShortcutUnavailable(RootDestination::Tabs));
        }

        Ok(self.navigation_response(effects))
    }

    fn navigation_response(&self, effects: Vec<NavigationEffect>) -> NavigationResponse {
        NavigationResponse {
            state: self.navigation.state(),
            effects,
        }
    }

    // ============================================================================
    // Wallet events
    // ============================================================================

    pub fn events(&self) -> EventsResponse {
        self.events_response(&self.events.state())
    }

    pub async fn start_events(&self) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::Start).await
    }

    pub async fn stop_events(&self) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::Stop).await
    }

    pub async fn select_event(&self, id: &str) -> Result<EventsResponse, HostError> {
        let event = self.find_event(id)?;
        let state = self.events.dispatch(AggregatorAction::SelectEvent(event.id)).await?;
        // A rebuild may have dropped the event after the lookup above
        ensure_selected(&state, id)?;
        Ok(self.events_response(&state))
    }

    pub async fn clear_selection(&self) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::ClearSelection).await
    }

    pub async fn show_list(&self, mode: EventsListMode) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::ShowList(mode)).await
    }

    pub async fn copy_event_detail(
        &self,
        id: &str,
        field: CopyField,
    ) -> Result<EventsResponse, HostError> {
        let event = self.find_event(id)?;
        let text = match field {
            CopyField::Id => Some(event.id.to_string()),
            CopyField::Address => event.address.clone(),
            CopyField::Memo => event.memo.clone(),
        }
        .filter(|text| !text.is_empty())
        .ok_or_else(|| HostError::NothingToCopy(format!("{:?} of event {}", field, id)))?;

        self.apply(AggregatorAction::CopyEventDetail(text)).await
    }

    /// Raise the leave-app prompt for the event's block explorer page
    pub async fn open_in_explorer(&self, id: &str) -> Result<EventsResponse, HostError> {
        let event = self.find_event(id)?;
        let url = event
            .explorer_url(&self.config.nav.explorer_url)
            .ok_or_else(|| HostError::NoExplorerLink(id.to_string()))?;
        self.apply(AggregatorAction::RequestExternalOpen(url)).await
    }

    pub async fn confirm_open(&self) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::ConfirmOpen).await
    }

    pub async fn dismiss_prompt(&self) -> Result<EventsResponse, HostError> {
        self.apply(AggregatorAction::DismissPrompt).await
    }

    pub fn clipboard(&self) -> ClipboardResponse {
        ClipboardResponse {
            contents: self.clipboard.contents(),
            opened_urls: self
                .opener
                .opened()
                .into_iter()
                .map(|url| url.to_string())
                .collect(),
        }
    }

    async fn apply(&self, action: AggregatorAction) -> Result<EventsResponse, HostError> {
        let state = self.events.dispatch(action).await?;
        Ok(self.events_response(&state))
    }

    fn find_event(&self, id: &str) -> Result<WalletEvent, HostError> {
        self.events
            .state()
            .events
            .get(&TransactionId::new(id))
            .cloned()
            .ok_or_else(|| HostError::EventNotFound(id.to_string()))
    }

    fn event_view(&self, event: &WalletEvent, state: &WalletEventsState) -> EventView {
        let height = state.latest_mined_height.unwrap_or(0);
        EventView {
            confirmations: event.confirmations(height),
            confirmed: event.is_confirmed(height, state.required_confirmations),
            reply_address: event.reply_address().map(str::to_string),
            explorer_url: event
                .explorer_url(&self.config.nav.explorer_url)
                .map(|url| url.to_string()),
            event: event.clone(),
        }
    }

    fn events_response(&self, state: &WalletEventsState) -> EventsResponse {
        let events = match state.list_mode {
            EventsListMode::Latest => state
                .events
                .latest(LATEST_EVENTS_COUNT)
                .map(|event| self.event_view(event, state))
                .collect(),
            EventsListMode::All => state
                .events
                .iter()
                .map(|event| self.event_view(event, state))
                .collect(),
        };

        EventsResponse {
            subscribed: state.subscribed,
            status: state.last_status.clone(),
            latest_mined_height: state.latest_mined_height,
            required_confirmations: state.required_confirmations,
            list_mode: state.list_mode,
            total: state.events.len(),
            events,
            selected: state
                .selected_event()
                .map(|event| self.event_view(event, state)),
            leave_app_prompt: state.leave_app_prompt.as_ref().map(|url| url.to_string()),
            last_fetch_error: state.last_fetch_error.as_ref().map(|e| e.to_string()),
        }
    }
}

fn ensure_selected(state: &WalletEventsState, id: &str) -> Result<(), HostError> {
    match &state.selected {
        Some(selected) if selected.as_str() == id => Ok(()),
        _ => Err(HostError::EventNotFound(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_selection_is_not_found() {
        let mut state = WalletEventsState::new(10);
        assert!(matches!(
            ensure_selected(&state, "a"),
            Err(HostError::EventNotFound(id)) if id == "a"
        ));

        state.selected = Some(TransactionId::new("b"));
        assert!(matches!(
            ensure_selected(&state, "a"),
            Err(HostError::EventNotFound(_))
        ));

        state.selected = Some(TransactionId::new("a"));
        assert!(ensure_selected(&state, "a").is_ok());
    }
}
