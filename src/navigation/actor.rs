//! Mailbox-driven runner for the navigation state machine
//!
//! Events are processed strictly in the order they are accepted into the
//! mailbox, one turn at a time, on a single task. Snapshots are published
//! through a `watch` channel and effects through a `broadcast` channel.

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use super::machine::NavigationStateMachine;
use super::state::{NavigationEffect, NavigationEvent, NavigationState};
use crate::error::WalletNavError;

const EFFECT_CHANNEL_CAPACITY: usize = 64;

struct Envelope {
    event: NavigationEvent,
    reply: Option<oneshot::Sender<Vec<NavigationEffect>>>,
}

/// Cloneable handle to a running navigation actor
///
/// The actor stops once every handle has been dropped.
#[derive(Clone)]
pub struct NavigationHandle {
    mailbox: mpsc::UnboundedSender<Envelope>,
    state: watch::Receiver<NavigationState>,
    effects: broadcast::Sender<NavigationEffect>,
}

impl NavigationHandle {
    /// Move the machine onto its own task; must be called within a tokio runtime
    pub fn spawn(machine: NavigationStateMachine) -> Self {
        let (mailbox, rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(machine.state().clone());
        let (effects, _) = broadcast::channel(EFFECT_CHANNEL_CAPACITY);

        tokio::spawn(run(machine, rx, state_tx, effects.clone()));

        Self {
            mailbox,
            state,
            effects,
        }
    }

    /// Enqueue an event without waiting for it to be processed
    pub fn send(&self, event: NavigationEvent) -> Result<(), WalletNavError> {
        self.mailbox
            .send(Envelope { event, reply: None })
            .map_err(|_| WalletNavError::ActorStopped("navigation"))
    }

    /// Enqueue an event and wait for the effects of its turn
    pub async fn dispatch(
        &self,
        event: NavigationEvent,
    ) -> Result<Vec<NavigationEffect>, WalletNavError> {
        let (reply, rx) = oneshot::channel();
        self.mailbox
            .send(Envelope {
                event,
                reply: Some(reply),
            })
            .map_err(|_| WalletNavError::ActorStopped("navigation"))?;
        rx.await.map_err(|_| WalletNavError::ActorStopped("navigation"))
    }

    /// Snapshot of the state after the most recent turn
    pub fn state(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<NavigationState> {
        self.state.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEffect> {
        self.effects.subscribe()
    }
}

async fn run(
    mut machine: NavigationStateMachine,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    state_tx: watch::Sender<NavigationState>,
    effects_tx: broadcast::Sender<NavigationEffect>,
) {
    log::debug!("Navigation actor started");

    while let Some(Envelope { event, reply }) = rx.recv().await {
        let effects = machine.handle(event);

        state_tx.send_replace(machine.state().clone());
        for effect in &effects {
            // No subscribers is fine
            let _ = effects_tx.send(effect.clone());
        }
        if let Some(reply) = reply {
            let _ = reply.send(effects);
        }
    }

    log::debug!("Navigation actor stopped");
}
