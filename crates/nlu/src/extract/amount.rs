//! Monetary amount extraction
//!
//! Recognizes Indian-English magnitude words (lakh, crore, thousand/hajar)
//! with a preceding decimal multiplier, currency-prefixed or -suffixed
//! figures, and plain grouped numerics. Every candidate in the utterance is
//! collected and the largest valid one wins: loan amounts are reliably the
//! biggest number mentioned, while rates and durations are small numbers that
//! would otherwise be false positives.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize_numerals;

/// Smallest value accepted as a loan amount
const MIN_AMOUNT: f64 = 100.0;

struct AmountPattern {
    regex: Regex,
    multiplier: f64,
}

impl AmountPattern {
    fn new(pattern: &str, multiplier: f64) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static amount pattern must compile"),
            multiplier,
        }
    }
}

static AMOUNT_PATTERNS: Lazy<Vec<AmountPattern>> = Lazy::new(|| {
    vec![
        AmountPattern::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:crores?|cr\b|करोड़|करोड)", 10_000_000.0),
        AmountPattern::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:lakhs?|lacs?|लाख)", 100_000.0),
        AmountPattern::new(
            r"(?i)(\d+(?:\.\d+)?)\s*(?:thousand|haza{0,2}r|hajj?a{1,2}r|हज़ार|हजार|k\b)",
            1_000.0,
        ),
        // Currency symbol or word before the figure
        AmountPattern::new(r"(?i)(?:₹|rs\.?|rupees?|inr)\s*(\d+(?:,\d+)*(?:\.\d+)?)", 1.0),
        // Currency word after the figure ("500 rupees", "५०० रुपये")
        AmountPattern::new(
            r"(?i)(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:rupees?|rupay[ae]|रुपये|रुपए|रूपये)",
            1.0,
        ),
        // Plain numerics, grouped or at least three digits; ten-digit phone
        // numbers never match because a digit neighbour breaks the boundary
        AmountPattern::new(r"\b(\d{1,3}(?:,\d{2,3})+|\d{3,9})\b", 1.0),
    ]
});

/// Extract the loan amount from an utterance, if any
pub fn extract_amount(text: &str) -> Option<f64> {
    let text = normalize_numerals(text);
    let mut best: Option<f64> = None;

    for pattern in AMOUNT_PATTERNS.iter() {
        for caps in pattern.regex.captures_iter(&text) {
            let raw = caps[1].replace(',', "");
            if let Ok(n) = raw.parse::<f64>() {
                let value = n * pattern.multiplier;
                if value >= MIN_AMOUNT && best.map_or(true, |b| value > b) {
                    best = Some(value);
                }
            }
        }
    }

    if let Some(amount) = best {
        tracing::debug!(amount, "extracted loan amount");
    }
    best
}
