//! Interest calculation engine
//!
//! Pure, stateless functions mapping a loan's principal, rate, and period
//! count to payable and outstanding amounts. The three rate conventions
//! (monthly, yearly, sankda) differ only in which rate and which period count
//! feed the same linear or compound formula, not in the formula itself:
//! normalisation happens once, in [`LoanTerms`] construction, and the arithmetic
//! below stays unit-agnostic.
//!
//! All arithmetic is f64 with no rounding; formatting is a presentation
//! concern. Callers validate that amount and periods are positive before
//! invoking; the engine does not re-validate.

use crate::loan::{InterestMethod, InterestType, Loan};
use crate::SANKDA_RATE;

/// Effective percentage rate for a method
///
/// Sankda is pinned at 12 regardless of the stated rate; all other methods
/// pass the rate through unchanged.
pub fn effective_rate(method: InterestMethod, rate: f64) -> f64 {
    match method {
        InterestMethod::Sankda => SANKDA_RATE,
        _ => rate,
    }
}

/// Normalised inputs for the interest formulas
///
/// `periods` is already scaled to the unit the method expects: monthly loans
/// accrue over `years * 12` periods at the stated per-month rate, yearly and
/// sankda loans over `years` periods at an annual rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub amount: f64,
    pub rate: f64,
    pub periods: f64,
    pub interest_type: InterestType,
}

impl LoanTerms {
    /// Build terms from raw slot values, applying the method normalisation
    pub fn from_parts(
        amount: f64,
        rate: f64,
        method: InterestMethod,
        years: f64,
        interest_type: InterestType,
    ) -> Self {
        let rate = effective_rate(method, rate);
        let periods = match method {
            InterestMethod::Monthly => years * 12.0,
            InterestMethod::Yearly | InterestMethod::Sankda => years,
        };
        Self {
            amount,
            rate,
            periods,
            interest_type,
        }
    }

    /// Build terms from a committed loan
    pub fn from_loan(loan: &Loan) -> Self {
        Self::from_parts(
            loan.amount,
            loan.interest_rate,
            loan.interest_method,
            loan.years,
            loan.interest_type,
        )
    }
}

/// Total payable at the end of the term
pub fn final_amount(terms: &LoanTerms) -> f64 {
    match terms.interest_type {
        InterestType::Simple => {
            terms.amount + (terms.amount * terms.rate * terms.periods) / 100.0
        }
        InterestType::Compound => terms.amount * (1.0 + terms.rate / 100.0).powf(terms.periods),
    }
}

/// Interest component of the payable amount
pub fn interest_amount(terms: &LoanTerms) -> f64 {
    final_amount(terms) - terms.amount
}

/// Payable amount still owed after recorded payments
pub fn outstanding_amount(terms: &LoanTerms, total_paid: f64) -> f64 {
    final_amount(terms) - total_paid
}
