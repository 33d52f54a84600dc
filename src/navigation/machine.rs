//! Navigation state machine
//!
//! Consumes lifecycle events and deep links and produces destination
//! transitions. Each call to [`NavigationStateMachine::handle`] is one turn:
//! all mutation happens inside it, and the effects it returns describe what
//! changed, in order.

use std::sync::Arc;

use super::state::{
    AppInitializationState, NavigationEffect, NavigationEvent, NavigationState, RootDestination,
    Tab,
};
use crate::deeplink::{DeeplinkResolver, Destination};

/// Decides where the app lands once initialization completes without a
/// queued deep link (e.g. onboarding vs. tabs, depending on wallet presence)
pub trait PostInitRouter: Send + Sync {
    fn destination_after_initialization(&self, state: &NavigationState) -> RootDestination;
}

impl<F> PostInitRouter for F
where
    F: Fn(&NavigationState) -> RootDestination + Send + Sync,
{
    fn destination_after_initialization(&self, state: &NavigationState) -> RootDestination {
        self(state)
    }
}

pub struct NavigationStateMachine {
    state: NavigationState,
    resolver: DeeplinkResolver,
    router: Arc<dyn PostInitRouter>,
}

impl NavigationStateMachine {
    pub fn new(resolver: DeeplinkResolver, router: Arc<dyn PostInitRouter>) -> Self {
        Self::with_state(NavigationState::default(), resolver, router)
    }

    /// Start from an explicit state (restored sessions, tests)
    pub fn with_state(
        state: NavigationState,
        resolver: DeeplinkResolver,
        router: Arc<dyn PostInitRouter>,
    ) -> Self {
        Self {
            state,
            resolver,
            router,
        }
    }

    /// Memo limit the send flow is prefilled against
    pub fn with_memo_char_limit(mut self, char_limit: usize) -> Self {
        self.state.tabs.send.memo.char_limit = char_limit;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: NavigationEvent) -> Vec<NavigationEffect> {
        let mut effects = Vec::new();

        match event {
            NavigationEvent::AppInitialization(next) => {
                self.on_app_initialization(next, &mut effects);
            }
            NavigationEvent::DeeplinkReceived(uri) => match self.resolver.resolve(&uri) {
                Ok(destination) => self.on_destination(destination, &mut effects),
                Err(error) => {
                    log::warn!("Deeplink rejected, staying on {:?}: {}", self.state.destination, error);
                    effects.push(NavigationEffect::DeeplinkRejected { error });
                }
            },
            NavigationEvent::DestinationResolved(destination) => {
                self.on_destination(destination, &mut effects);
            }
            NavigationEvent::GoToDestination(target) => {
                self.go_to_destination(target, &mut effects);
            }
            NavigationEvent::ShowDebugMenu => {
                self.transition(RootDestination::Startup, &mut effects);
            }
        }

        effects
    }

    fn on_app_initialization(
        &mut self,
        next: AppInitializationState,
        effects: &mut Vec<NavigationEffect>,
    ) {
        log::debug!(
            "App initialization: {:?} -> {:?}",
            self.state.app_initialization_state,
            next
        );
        self.state.app_initialization_state = next;

        if next != AppInitializationState::Initialized {
            return;
        }

        // Drain within this turn so no later event can slip in ahead of the queued link
        if let Some(pending) = self.state.pending_deeplink.take() {
            log::info!("Replaying deeplink queued before initialization: {:?}", pending);
            self.apply_destination(pending, effects);
            return;
        }

        if matches!(
            self.state.destination,
            RootDestination::Startup | RootDestination::Welcome
        ) {
            let target = self.router.destination_after_initialization(&self.state);
            self.transition(target, effects);
        }
    }

    fn on_destination(&mut self, destination: Destination, effects: &mut Vec<NavigationEffect>) {
        if self.state.is_initialized() {
            self.apply_destination(destination, effects);
            return;
        }

        if let Some(replaced) = &self.state.pending_deeplink {
            log::debug!("Replacing queued deeplink {:?}", replaced);
        }
        log::info!(
            "App not initialized ({:?}), queueing deeplink {:?}",
            self.state.app_initialization_state,
            destination
        );
        self.state.pending_deeplink = Some(destination.clone());
        effects.push(NavigationEffect::DeeplinkQueued { destination });
    }

    fn apply_destination(&mut self, destination: Destination, effects: &mut Vec<NavigationEffect>) {
        match destination {
            Destination::Home => {
                self.transition(RootDestination::Tabs, effects);
            }
            Destination::Send {
                amount,
                address,
                memo,
            } => {
                self.transition(RootDestination::Tabs, effects);

                self.state.tabs.selected_tab = Tab::Send;
                effects.push(NavigationEffect::TabSelected { tab: Tab::Send });

                let send = std::mem::take(&mut self.state.tabs.send).prefilled(amount, &address, &memo);
                self.state.tabs.send = send.clone();
                effects.push(NavigationEffect::SendPrefilled { send });
            }
        }
    }

    /// Only the startup -> tabs shortcut is allowed, and only when tabs is where we came from
    fn go_to_destination(&mut self, target: RootDestination, effects: &mut Vec<NavigationEffect>) {
        let allowed = target == RootDestination::Tabs
            && self.state.destination == RootDestination::Startup
            && self.state.previous_destination == Some(RootDestination::Tabs);

        if allowed {
            self.transition(target, effects);
        } else {
            log::debug!(
                "Shortcut to {:?} unavailable from {:?} (previous {:?})",
                target,
                self.state.destination,
                self.state.previous_destination
            );
            effects.push(NavigationEffect::ShortcutUnavailable {
                destination: target,
            });
        }
    }

    fn transition(&mut self, to: RootDestination, effects: &mut Vec<NavigationEffect>) {
        let from = self.state.destination;
        if from == to {
            effects.push(NavigationEffect::Reentered { destination: to });
            return;
        }

        log::debug!("Navigation: {:?} -> {:?}", from, to);
        self.state.previous_destination = Some(from);
        self.state.destination = to;
        effects.push(NavigationEffect::DestinationChanged { from, to });
    }
}

impl std::fmt::Debug for NavigationStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationStateMachine")
            .field("state", &self.state)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
