//! Actor runtime for the wallet event aggregator
//!
//! Runs the reducer on one task behind a mailbox and executes its effects:
//! the throttled status subscription and one-shot event fetches both post
//! their results back into the same mailbox, so every mutation still happens
//! in a serialized turn.

use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use url::Url;

use super::reducer::{
    AggregatorAction, AggregatorEffect, EventsListMode, FetchToken, WalletEventAggregator,
    WalletEventsState,
};
use crate::error::WalletNavError;
use crate::events::TransactionId;
use crate::synchronizer::Synchronizer;
use crate::throttle::throttle_latest;

struct Envelope {
    action: AggregatorAction,
    reply: Option<oneshot::Sender<WalletEventsState>>,
}

impl Envelope {
    fn internal(action: AggregatorAction) -> Self {
        Self {
            action,
            reply: None,
        }
    }
}

/// Cloneable handle to a running aggregator
#[derive(Clone)]
pub struct AggregatorHandle {
    mailbox: mpsc::UnboundedSender<Envelope>,
    state: watch::Receiver<WalletEventsState>,
}

impl WalletEventAggregator {
    /// Move the aggregator onto its own task; must be called within a tokio runtime
    pub fn spawn(self) -> AggregatorHandle {
        let (mailbox, rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(self.state().clone());

        // Background tasks only hold weak senders so dropping every handle stops the actor
        tokio::spawn(run(self, rx, mailbox.downgrade(), state_tx));

        AggregatorHandle { mailbox, state }
    }
}

impl AggregatorHandle {
    pub fn send(&self, action: AggregatorAction) -> Result<(), WalletNavError> {
        self.mailbox
            .send(Envelope::internal(action))
            .map_err(|_| WalletNavError::ActorStopped("wallet events"))
    }

    /// Enqueue an action and wait for the state after its turn
    pub async fn dispatch(
        &self,
        action: AggregatorAction,
    ) -> Result<WalletEventsState, WalletNavError> {
        let (reply, rx) = oneshot::channel();
        self.mailbox
            .send(Envelope {
                action,
                reply: Some(reply),
            })
            .map_err(|_| WalletNavError::ActorStopped("wallet events"))?;
        rx.await
            .map_err(|_| WalletNavError::ActorStopped("wallet events"))
    }

    pub fn start(&self) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::Start)
    }

    pub fn stop(&self) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::Stop)
    }

    pub fn select_event(&self, id: TransactionId) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::SelectEvent(id))
    }

    pub fn clear_selection(&self) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::ClearSelection)
    }

    pub fn show_list(&self, mode: EventsListMode) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::ShowList(mode))
    }

    pub fn request_external_open(&self, url: Url) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::RequestExternalOpen(url))
    }

    pub fn confirm_open(&self) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::ConfirmOpen)
    }

    pub fn dismiss_prompt(&self) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::DismissPrompt)
    }

    pub fn copy_event_detail(&self, text: impl Into<String>) -> Result<(), WalletNavError> {
        self.send(AggregatorAction::CopyEventDetail(text.into()))
    }

    pub fn state(&self) -> WalletEventsState {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<WalletEventsState> {
        self.state.clone()
    }
}

async fn run(
    mut aggregator: WalletEventAggregator,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    mailbox: mpsc::WeakUnboundedSender<Envelope>,
    state_tx: watch::Sender<WalletEventsState>,
) {
    let synchronizer = aggregator.synchronizer();
    let throttle_interval = aggregator.throttle_interval();
    let mut subscription: Option<JoinHandle<()>> = None;

    while let Some(Envelope { action, reply }) = rx.recv().await {
        for effect in aggregator.reduce(action) {
            match effect {
                AggregatorEffect::Subscribe { epoch } => {
                    if let Some(previous) = subscription.take() {
                        previous.abort();
                    }
                    subscription = Some(spawn_subscription(
                        synchronizer.clone(),
                        throttle_interval,
                        epoch,
                        mailbox.clone(),
                    ));
                }
                AggregatorEffect::Unsubscribe => {
                    if let Some(previous) = subscription.take() {
                        previous.abort();
                    }
                }
                AggregatorEffect::FetchEvents(token) => {
                    spawn_fetch(synchronizer.clone(), token, mailbox.clone());
                }
            }
        }

        state_tx.send_replace(aggregator.state().clone());
        if let Some(reply) = reply {
            let _ = reply.send(aggregator.state().clone());
        }
    }

    if let Some(previous) = subscription.take() {
        previous.abort();
    }
    log::debug!("Wallet events actor stopped");
}

fn spawn_subscription(
    synchronizer: Arc<dyn Synchronizer>,
    period: Duration,
    epoch: u64,
    mailbox: mpsc::WeakUnboundedSender<Envelope>,
) -> JoinHandle<()> {
    let mut statuses = throttle_latest(synchronizer.status_stream(), period);

    tokio::spawn(async move {
        while let Some(status) = statuses.next().await {
            let Some(tx) = mailbox.upgrade() else {
                break;
            };
            if tx
                .send(Envelope::internal(AggregatorAction::StatusChanged { epoch, status }))
                .is_err()
            {
                break;
            }
        }
        log::debug!("Status subscription for epoch {} ended", epoch);
    })
}

fn spawn_fetch(
    synchronizer: Arc<dyn Synchronizer>,
    token: FetchToken,
    mailbox: mpsc::WeakUnboundedSender<Envelope>,
) {
    tokio::spawn(async move {
        let result = synchronizer.fetch_all_events().await;
        if let Some(tx) = mailbox.upgrade() {
            let _ = tx.send(Envelope::internal(AggregatorAction::EventsFetched {
                token,
                result,
            }));
        }
    });
}
