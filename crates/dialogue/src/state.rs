//! Conversation state
//!
//! Exactly one live `ConversationState` exists per chat session. It is owned
//! by the caller, mutated only through the dialogue engine's `step` function,
//! and reset to idle on commit, cancellation, or explicit exit. It is never
//! persisted across sessions.

use serde::{Deserialize, Serialize};

use lenden_core::{LoanDraft, RequiredSlot};

/// Top-level conversation mode
///
/// `Engaged` is the neutral sub-mode of idle entered after a greeting: the
/// capability menu has been shown but no slot collection has started. All
/// reset paths land on `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Idle,
    Engaged,
    Collecting,
    Confirming,
}

/// Slot currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Name,
    Amount,
    Rate,
    Duration,
    Confirm,
}

impl Step {
    pub(crate) fn for_slot(slot: RequiredSlot) -> Self {
        match slot {
            RequiredSlot::Name => Step::Name,
            RequiredSlot::Amount => Step::Amount,
            RequiredSlot::Rate => Step::Rate,
            RequiredSlot::Duration => Step::Duration,
        }
    }
}

/// Mutable per-session dialogue state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub mode: Mode,
    pub step: Step,
    pub draft: LoanDraft,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            step: Step::Name,
            draft: LoanDraft::default(),
        }
    }

    /// Discard the draft and return to idle
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True once any loan slot holds a value
    pub fn slots_filled(&self) -> bool {
        let d = &self.draft;
        d.borrower_name.is_some()
            || d.amount.is_some()
            || d.interest_rate.is_some()
            || d.years.is_some()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
