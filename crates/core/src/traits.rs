//! Collaborator traits
//!
//! The dialogue core talks to the rest of the application through these
//! seams. Stores, speech backends, and the fallback assistant are all
//! pluggable; the core only ever sees the trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::loan::Loan;

/// Persistent loan storage
///
/// The loan record builder only calls `create_loan`; listing and lookup serve
/// the surrounding application. `record_payment` is the single path allowed
/// to mutate `total_paid` and `is_active` after commit.
pub trait LedgerStore: Send + Sync {
    /// Persist a freshly built loan, returning the stored entity
    fn create_loan(&self, loan: Loan) -> Result<Loan, PersistenceError>;

    /// All loans in insertion order
    fn list_loans(&self) -> Result<Vec<Loan>, PersistenceError>;

    /// Look up one loan by id
    fn get_loan(&self, id: Uuid) -> Result<Option<Loan>, PersistenceError>;

    /// Record a repayment against a loan
    ///
    /// Adds to `total_paid` and clears `is_active` once the payable amount is
    /// covered. Returns the updated loan.
    fn record_payment(&self, id: Uuid, amount: f64) -> Result<Loan, PersistenceError>;
}

/// Text-to-speech output half of Voice I/O
///
/// The dialogue machine emits prompt text; reading it aloud is a transport
/// concern implemented outside this workspace.
pub trait SpeechSynthesis: Send + Sync {
    /// Read a prompt aloud
    fn speak(&self, text: &str);
}

/// Fallback general-purpose assistant
///
/// Invoked by the calling layer only when the intent classifier returns
/// unrecognized for an utterance outside an active slot-filling flow. The
/// dialogue core never calls this directly.
#[async_trait]
pub trait GeneralAssistant: Send + Sync {
    /// Produce a free-form reply given the utterance and a short summary of
    /// conversation context
    async fn respond(&self, utterance: &str, context_summary: &str) -> String;
}
