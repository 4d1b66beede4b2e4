//! Loan duration extraction
//!
//! Reads `<number> year(s)` or `<number> month(s)` in either language. Month
//! values are converted to fractional years; the result is floored at 0.1
//! years so a degenerate zero-duration loan can never be drafted. The
//! original granularity is kept so the due date can use a month-based offset.

use once_cell::sync::Lazy;
use regex::Regex;

use lenden_core::DurationUnit;

use super::normalize_numerals;

/// Floor applied after unit conversion
const MIN_YEARS: f64 = 0.1;

/// Extracted duration slot value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationMatch {
    /// Duration in years (months arrive as months / 12)
    pub years: f64,
    /// Unit the user originally stated
    pub unit: DurationUnit,
}

static YEARS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:years?|yrs?|saal|varsh|साल|वर्ष)")
        .expect("static years pattern")
});

static MONTHS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:months?|mahin[ae]|mahina|महीने|महीना|माह)")
        .expect("static months pattern")
});

/// Extract the loan duration from an utterance, if any
pub fn extract_duration(text: &str) -> Option<DurationMatch> {
    let text = normalize_numerals(text);

    if let Some(caps) = YEARS_PATTERN.captures(&text) {
        let years: f64 = caps[1].parse().ok()?;
        return Some(DurationMatch {
            years: years.max(MIN_YEARS),
            unit: DurationUnit::Years,
        });
    }

    if let Some(caps) = MONTHS_PATTERN.captures(&text) {
        let months: f64 = caps[1].parse().ok()?;
        return Some(DurationMatch {
            years: (months / 12.0).max(MIN_YEARS),
            unit: DurationUnit::Months,
        });
    }

    None
}
