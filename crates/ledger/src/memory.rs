//! In-memory ledger store
//!
//! Keeps loans in a `RwLock`-guarded map with an insertion-order index so
//! `list_loans` returns them in creation order. An optional capacity limit
//! models quota exhaustion in the backing key-value store, which the dialogue
//! engine's commit-retry path has to survive.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use lenden_core::{
    final_amount, LedgerStore, Loan, LoanTerms, PersistenceError,
};

#[derive(Default)]
struct Inner {
    loans: HashMap<Uuid, Loan>,
    order: Vec<Uuid>,
}

/// In-memory `LedgerStore` implementation
#[derive(Default)]
pub struct MemoryLedgerStore {
    inner: RwLock<Inner>,
    capacity: Option<usize>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes beyond `capacity` loans
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            capacity: Some(capacity),
        }
    }

    /// Number of stored loans
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn create_loan(&self, loan: Loan) -> Result<Loan, PersistenceError> {
        let mut inner = self.inner.write();
        if let Some(cap) = self.capacity {
            if inner.order.len() >= cap {
                return Err(PersistenceError::QuotaExceeded);
            }
        }

        tracing::info!(
            id = %loan.id,
            borrower = %loan.borrower_name,
            amount = loan.amount,
            "loan created"
        );
        inner.order.push(loan.id);
        inner.loans.insert(loan.id, loan.clone());
        Ok(loan)
    }

    fn list_loans(&self) -> Result<Vec<Loan>, PersistenceError> {
        let inner = self.inner.read();
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.loans.get(id).cloned())
            .collect())
    }

    fn get_loan(&self, id: Uuid) -> Result<Option<Loan>, PersistenceError> {
        Ok(self.inner.read().loans.get(&id).cloned())
    }

    fn record_payment(&self, id: Uuid, amount: f64) -> Result<Loan, PersistenceError> {
        let mut inner = self.inner.write();
        let loan = inner
            .loans
            .get_mut(&id)
            .ok_or(PersistenceError::NotFound(id))?;

        loan.total_paid += amount;
        let payable = final_amount(&LoanTerms::from_loan(loan));
        if loan.total_paid >= payable {
            loan.is_active = false;
        }

        tracing::info!(
            id = %id,
            paid = amount,
            total_paid = loan.total_paid,
            active = loan.is_active,
            "payment recorded"
        );
        Ok(loan.clone())
    }
}
