//! Loan entity and draft types
//!
//! `LoanDraft` is the partially-filled slot set collected during a
//! conversation. `Loan` is the final entity owned by the ledger store after
//! commit; its core fields never change once created, only `total_paid` and
//! `is_active` move through the store's payment-recording path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SANKDA_RATE;

/// Interest rate convention for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestMethod {
    /// Rate is quoted per month
    Monthly,
    /// Rate is quoted per year
    Yearly,
    /// Fixed convention: exactly 12% per year regardless of any stated rate
    Sankda,
}

impl std::fmt::Display for InterestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
            Self::Sankda => write!(f, "sankda"),
        }
    }
}

/// Interest accrual regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Compound,
}

/// Granularity the duration was originally stated in
///
/// Kept on the draft so the due date can use a month-based offset when the
/// user said "18 months" rather than "1.5 years".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Years,
    Months,
}

/// Partially-filled slot set built up over a conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanDraft {
    pub borrower_name: Option<String>,
    /// Principal in rupees, valid only when > 0
    pub amount: Option<f64>,
    /// Percentage, valid only when >= 0
    pub interest_rate: Option<f64>,
    pub interest_method: Option<InterestMethod>,
    /// Duration in years (month inputs arrive as months / 12)
    pub years: Option<f64>,
    pub duration_unit: Option<DurationUnit>,
    pub borrower_phone: Option<String>,
    pub notes: Option<String>,
}

impl LoanDraft {
    /// Set the rate slot, enforcing the sankda invariant at fill time
    ///
    /// Sankda is a named convention, not a user-supplied rate: whatever number
    /// the user stated alongside it, the stored rate is exactly 12.
    pub fn fill_rate(&mut self, rate: f64, method: InterestMethod) {
        let rate = match method {
            InterestMethod::Sankda => SANKDA_RATE,
            _ => rate,
        };
        self.interest_rate = Some(rate);
        self.interest_method = Some(method);
    }

    /// First required slot still missing, in collection order
    pub fn first_missing(&self) -> Option<RequiredSlot> {
        if self.borrower_name.is_none() {
            Some(RequiredSlot::Name)
        } else if self.amount.is_none() {
            Some(RequiredSlot::Amount)
        } else if self.interest_rate.is_none() || self.interest_method.is_none() {
            Some(RequiredSlot::Rate)
        } else if self.years.is_none() {
            Some(RequiredSlot::Duration)
        } else {
            None
        }
    }

    /// True once all four required slots hold values
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Freeze the draft into a fully-specified record, or `None` if any
    /// required slot is still empty
    pub fn resolve(&self) -> Option<ResolvedDraft> {
        Some(ResolvedDraft {
            borrower_name: self.borrower_name.clone()?,
            amount: self.amount?,
            interest_rate: self.interest_rate?,
            interest_method: self.interest_method?,
            years: self.years?,
            duration_unit: self.duration_unit.unwrap_or(DurationUnit::Years),
            borrower_phone: self.borrower_phone.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// The four slots the dialogue collects before confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredSlot {
    Name,
    Amount,
    Rate,
    Duration,
}

/// Fully-specified draft, ready for the loan record builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDraft {
    pub borrower_name: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub interest_method: InterestMethod,
    pub years: f64,
    pub duration_unit: DurationUnit,
    pub borrower_phone: Option<String>,
    pub notes: Option<String>,
}

/// Committed loan entity, owned by the ledger store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub borrower_name: String,
    pub borrower_phone: Option<String>,
    pub notes: Option<String>,
    pub amount: f64,
    pub interest_rate: f64,
    pub interest_method: InterestMethod,
    pub interest_type: InterestType,
    pub years: f64,
    pub date_created: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Mutated only by the store's payment-recording path
    pub total_paid: f64,
    pub is_active: bool,
}
