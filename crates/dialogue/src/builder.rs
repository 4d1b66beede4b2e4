//! Loan record builder
//!
//! Turns a completed draft into a persisted `Loan`: fresh id, creation
//! timestamp, due date, zeroed payment state. The conversational flow only
//! ever produces simple-interest loans; compound loans come from the
//! non-conversational form elsewhere in the application.

use chrono::{Months, Utc};
use std::sync::Arc;
use uuid::Uuid;

use lenden_core::{InterestType, LedgerStore, Loan, PersistenceError, ResolvedDraft};

/// Builds and persists loan records from resolved drafts
pub struct LoanRecordBuilder {
    store: Arc<dyn LedgerStore>,
}

impl LoanRecordBuilder {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Build a `Loan` from the draft and hand it to the store
    ///
    /// The due date is the creation time plus the duration rounded to whole
    /// months, which preserves month-granular extractions ("18 months") as
    /// well as year inputs. Store failures propagate so the caller can keep
    /// the session in the confirmation step for a retry.
    pub fn commit(&self, draft: &ResolvedDraft) -> Result<Loan, PersistenceError> {
        let now = Utc::now();
        let months = (draft.years * 12.0).round().max(1.0) as u32;
        let due_date = now
            .checked_add_months(Months::new(months))
            .unwrap_or(now);

        let loan = Loan {
            id: Uuid::new_v4(),
            borrower_name: draft.borrower_name.clone(),
            borrower_phone: draft.borrower_phone.clone(),
            notes: draft.notes.clone(),
            amount: draft.amount,
            interest_rate: draft.interest_rate,
            interest_method: draft.interest_method,
            interest_type: InterestType::Simple,
            years: draft.years,
            date_created: now,
            due_date,
            total_paid: 0.0,
            is_active: true,
        };

        tracing::info!(
            id = %loan.id,
            borrower = %loan.borrower_name,
            amount = loan.amount,
            rate = loan.interest_rate,
            method = %loan.interest_method,
            years = loan.years,
            "committing loan from conversation"
        );
        self.store.create_loan(loan)
    }
}
