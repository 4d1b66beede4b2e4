//! Core traits and types for the lending ledger
//!
//! This crate provides the foundational pieces used across all other crates:
//! - Loan entity and draft types
//! - Interest calculation engine (pure functions)
//! - Collaborator traits (ledger store, speech synthesis, general assistant)
//! - Transcript types for voice input
//! - Error types

pub mod error;
pub mod interest;
pub mod loan;
pub mod traits;
pub mod transcript;

pub use error::{Error, PersistenceError, Result};
pub use interest::{effective_rate, final_amount, interest_amount, outstanding_amount, LoanTerms};
pub use loan::{
    DurationUnit, InterestMethod, InterestType, Loan, LoanDraft, RequiredSlot, ResolvedDraft,
};
pub use traits::{GeneralAssistant, LedgerStore, SpeechSynthesis};
pub use transcript::TranscriptResult;

/// Rate applied whenever the sankda convention is selected, in percent per year.
pub const SANKDA_RATE: f64 = 12.0;
