//! Error types shared across the workspace
//!
//! Extraction misses and slot validation failures are not errors: extractors
//! return `Option` and the dialogue machine re-prompts. Only failures that
//! cross a component boundary (persistence, an unresolvable draft) surface
//! through these types.

use thiserror::Error;

/// Failure inside a ledger store implementation
///
/// Defined here so the `LedgerStore` trait can name it without depending on
/// any concrete store crate.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Underlying storage rejected the write
    #[error("storage failure: {0}")]
    Storage(String),

    /// Store is at capacity (quota exhausted)
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// No loan with the given id
    #[error("loan not found: {0}")]
    NotFound(uuid::Uuid),

    /// Loan could not be encoded or decoded
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Workspace-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Ledger store failed to persist or read a loan
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A draft was handed to the builder with required slots missing
    #[error("draft is incomplete: missing {0}")]
    IncompleteDraft(String),
}

pub type Result<T> = std::result::Result<T, Error>;
