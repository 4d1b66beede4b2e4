//! Ledger store implementations
//!
//! The production application sits on a key-value persistence layer; this
//! crate provides the in-memory reference store used by tests and embedders.
//! It is the only component allowed to touch `total_paid`/`is_active` after a
//! loan is committed.

pub mod memory;

pub use lenden_core::PersistenceError;
pub use memory::MemoryLedgerStore;
