//! Send-flow prefill
//!
//! Projects a resolved send intent into the send-flow sub-state. Nothing is
//! validated here; the resolver already checked address and amount, and any
//! re-validation before submission belongs to the send flow itself.

use serde::{Deserialize, Serialize};

use crate::amount::Zatoshi;

/// Maximum memo size accepted by the shielded protocol
pub const DEFAULT_MEMO_CHAR_LIMIT: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoState {
    pub text: String,
    pub char_limit: usize,
}

impl MemoState {
    pub fn new(char_limit: usize) -> Self {
        Self {
            text: String::new(),
            char_limit,
        }
    }

    /// Whether the memo fits the protocol limit, counted in UTF-8 bytes
    pub fn is_within_limit(&self) -> bool {
        self.text.len() <= self.char_limit
    }
}

impl Default for MemoState {
    fn default() -> Self {
        Self::new(DEFAULT_MEMO_CHAR_LIMIT)
    }
}

/// Fields of the send flow a deep link can fill in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendFlowState {
    pub amount: Zatoshi,
    pub address: String,
    pub memo: MemoState,
}

impl SendFlowState {
    /// Copy amount, address and memo text into this state, keeping the rest
    pub fn prefilled(mut self, amount: Zatoshi, address: &str, memo: &str) -> Self {
        self.amount = amount;
        self.address = address.to_string();
        self.memo.text = memo.to_string();
        self
    }
}

/// Fresh send-flow state carrying the given triple
pub fn apply(amount: Zatoshi, address: &str, memo: &str) -> SendFlowState {
    SendFlowState::default().prefilled(amount, address, memo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_copies_fields_verbatim() {
        let state = apply(Zatoshi(123_000_000), "address", "some text");
        assert_eq!(state.amount, Zatoshi(123_000_000));
        assert_eq!(state.address, "address");
        assert_eq!(state.memo.text, "some text");
        assert_eq!(state.memo.char_limit, DEFAULT_MEMO_CHAR_LIMIT);
    }

    #[test]
    fn test_prefill_keeps_memo_limit() {
        let existing = SendFlowState {
            memo: MemoState::new(16),
            ..Default::default()
        };
        let state = existing.prefilled(Zatoshi(1), "addr", "this memo is far too long");
        assert_eq!(state.memo.char_limit, 16);
        assert!(!state.memo.is_within_limit());
    }
}
