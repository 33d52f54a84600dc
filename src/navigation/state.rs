//! Navigation data model

use serde::{Deserialize, Serialize};

use crate::deeplink::Destination;
use crate::error::DeeplinkError;
use crate::send::SendFlowState;

/// Top-level screen the application shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootDestination {
    Tabs,
    Sandbox,
    Onboarding,
    Startup,
    Welcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppInitializationState {
    #[default]
    Uninitialized,
    Initializing,
    Initialized,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Account,
    Send,
    Receive,
    Balances,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsState {
    pub selected_tab: Tab,
    pub send: SendFlowState,
}

/// State owned exclusively by the navigation state machine
///
/// `pending_deeplink` is only ever set while initialization has not
/// completed; it is drained inside the transition to `Initialized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub destination: RootDestination,
    pub previous_destination: Option<RootDestination>,
    pub pending_deeplink: Option<Destination>,
    pub app_initialization_state: AppInitializationState,
    pub tabs: TabsState,
}

impl NavigationState {
    pub fn is_initialized(&self) -> bool {
        self.app_initialization_state == AppInitializationState::Initialized
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            destination: RootDestination::Welcome,
            previous_destination: None,
            pending_deeplink: None,
            app_initialization_state: AppInitializationState::Uninitialized,
            tabs: TabsState::default(),
        }
    }
}

/// Input accepted by the state machine, processed one per turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NavigationEvent {
    AppInitialization(AppInitializationState),
    /// Raw URI handed over by the OS
    DeeplinkReceived(String),
    DestinationResolved(Destination),
    /// Debug "back" shortcut from the startup screen
    GoToDestination(RootDestination),
    ShowDebugMenu,
}

/// Observable outcome of a turn
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationEffect {
    DestinationChanged {
        from: RootDestination,
        to: RootDestination,
    },
    /// Navigated to the destination already shown; lets the shell scroll to top
    Reentered { destination: RootDestination },
    TabSelected { tab: Tab },
    SendPrefilled { send: SendFlowState },
    DeeplinkQueued { destination: Destination },
    DeeplinkRejected { error: DeeplinkError },
    /// `GoToDestination` was refused by its guard
    ShortcutUnavailable { destination: RootDestination },
}
