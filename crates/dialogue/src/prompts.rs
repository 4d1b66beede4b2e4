//! Prompt text
//!
//! Every string the dialogue machine says to the user lives here, so the
//! engine logic stays free of copy. Rupee amounts are printed without digit
//! grouping; paise appear only when the value is non-integral (rounding is a
//! presentation concern, never applied inside the interest engine).

use lenden_core::{InterestMethod, Loan, ResolvedDraft};

use crate::state::Step;

/// Format a rupee value for display
pub fn format_rupees(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("₹{}", value.round() as i64)
    } else {
        format!("₹{value:.2}")
    }
}

fn format_duration(years: f64) -> String {
    if (years - years.round()).abs() < 1e-6 {
        let whole = years.round() as i64;
        format!("{} year{}", whole, if whole == 1 { "" } else { "s" })
    } else {
        let months = (years * 12.0).round() as i64;
        format!("{} month{}", months, if months == 1 { "" } else { "s" })
    }
}

fn format_rate(rate: f64, method: InterestMethod) -> String {
    match method {
        InterestMethod::Sankda => "sankda (12% yearly)".to_string(),
        InterestMethod::Monthly => format!("{rate}% monthly"),
        InterestMethod::Yearly => format!("{rate}% yearly"),
    }
}

pub fn capability_menu() -> String {
    "Namaste! I can record a loan for you. Say something like \"add loan\", or give me the \
     details in one go: \"Raj ko 2 lakh ka loan 12% sankda pe\"."
        .to_string()
}

/// First ask for a slot
pub fn ask(step: Step) -> String {
    match step {
        Step::Name => "Who is the borrower? (e.g. \"Raj\", \"loan for Priya\")".to_string(),
        Step::Amount => "How much is the loan? (e.g. \"2 lakh\", \"₹50000\")".to_string(),
        Step::Rate => {
            "What interest rate? (e.g. \"12% yearly\", \"2% monthly\", or \"sankda\")".to_string()
        }
        Step::Duration => "For how long? (e.g. \"1 year\", \"18 months\")".to_string(),
        Step::Confirm => yes_no_reprompt(),
    }
}

/// Re-ask the same slot after a miss, with examples
pub fn reprompt(step: Step) -> String {
    match step {
        Step::Name => {
            "Sorry, I didn't catch the borrower's name. Try just the name, like \"Priya\"."
                .to_string()
        }
        Step::Amount => {
            "I couldn't find an amount there. Try \"50000\", \"2 lakh\", or \"1.5 crore\" \
             (minimum ₹100)."
                .to_string()
        }
        Step::Rate => {
            "I need the interest rate. Say \"12%\", \"2% monthly\", or \"sankda\" for the fixed \
             12% convention."
                .to_string()
        }
        Step::Duration => {
            "I couldn't find a duration. Try \"1 year\" or \"6 months\".".to_string()
        }
        Step::Confirm => yes_no_reprompt(),
    }
}

/// Pre-commit summary including the computed total
pub fn confirm_summary(draft: &ResolvedDraft, total: f64, interest: f64) -> String {
    format!(
        "Here's the loan: {} borrows {} at {} for {}. Interest comes to {}, total payable {}. \
         Shall I save it? (yes/no)",
        draft.borrower_name,
        format_rupees(draft.amount),
        format_rate(draft.interest_rate, draft.interest_method),
        format_duration(draft.years),
        format_rupees(interest),
        format_rupees(total),
    )
}

pub fn success(loan: &Loan) -> String {
    format!(
        "Done! Loan {} saved: {} owes {} by {}.",
        loan.id,
        loan.borrower_name,
        format_rupees(loan.amount),
        loan.due_date.format("%d %b %Y"),
    )
}

pub fn yes_no_reprompt() -> String {
    "Please answer yes or no: should I save this loan?".to_string()
}

pub fn cancelled() -> String {
    "Okay, I've discarded that loan. Say \"add loan\" whenever you want to start again."
        .to_string()
}

pub fn farewell() -> String {
    "Theek hai, bye! Your ledger is safe with me.".to_string()
}

pub fn commit_failed() -> String {
    "I couldn't save the loan just now. Your details are still here, say \"yes\" to try again \
     or \"no\" to discard."
        .to_string()
}
