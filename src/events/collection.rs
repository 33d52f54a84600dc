//! Ordered, identity-keyed set of wallet events

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

use super::model::{TransactionId, WalletEvent};

/// Events sorted newest first, unique by [`TransactionId`]
///
/// Never merged incrementally: [`rebuild`](Self::rebuild) produces a complete
/// new value from a full fetch and the owner swaps it in, so readers only
/// ever see a fully sorted collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletEventCollection {
    events: IndexMap<TransactionId, WalletEvent>,
}

impl WalletEventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort and deduplicate a full fetch
    ///
    /// Order: timestamp descending, events without a timestamp last, ties
    /// (including all untimestamped events) broken by ascending identity.
    /// When an identity appears more than once, the entry that sorts first
    /// is kept.
    pub fn rebuild(mut events: Vec<WalletEvent>) -> Self {
        events.sort_by(compare_events);

        let mut map = IndexMap::with_capacity(events.len());
        for event in events {
            map.entry(event.id.clone()).or_insert(event);
        }

        Self { events: map }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&WalletEvent> {
        self.events.get(id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.events.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WalletEvent> {
        self.events.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TransactionId> {
        self.events.keys()
    }

    /// The `count` most recent events
    pub fn latest(&self, count: usize) -> impl Iterator<Item = &WalletEvent> {
        self.events.values().take(count)
    }
}

fn compare_events(lhs: &WalletEvent, rhs: &WalletEvent) -> Ordering {
    let by_time = match (lhs.timestamp, rhs.timestamp) {
        (Some(l), Some(r)) => r.cmp(&l),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time.then_with(|| lhs.id.cmp(&rhs.id))
}

impl<'a> IntoIterator for &'a WalletEventCollection {
    type Item = &'a WalletEvent;
    type IntoIter = indexmap::map::Values<'a, TransactionId, WalletEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.values()
    }
}

/// Serialized as a plain list in display order
impl Serialize for WalletEventCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.events.values())
    }
}
