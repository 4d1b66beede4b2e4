//! Interest rate and method extraction
//!
//! A sankda marker word wins unconditionally: the convention is a fixed 12%
//! per year, so any numeric percentage in the same breath is ignored.
//! Otherwise a `<number>%` pattern is read and the method classified from
//! monthly/yearly keywords, defaulting to yearly when no period word appears.

use once_cell::sync::Lazy;
use regex::Regex;

use lenden_core::{InterestMethod, SANKDA_RATE};

use super::normalize_numerals;

/// Extracted rate slot value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateMatch {
    pub rate: f64,
    pub method: InterestMethod,
}

static SANKDA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bsa[in]?kd?[ao]\b|सैकड़ा|सैकडा|सेंकड़ा").expect("static sankda pattern")
});

static PERCENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent|pratishat|takk?a|प्रतिशत)")
        .expect("static percent pattern")
});

static MONTHLY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:month(?:ly)?|per\s+month|mahin[ae]|mahina|maasik|महीना|महीने|माह|मासिक)")
        .expect("static monthly pattern")
});

static YEARLY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:year(?:ly)?|annual(?:ly)?|per\s+(?:year|annum)|saal(?:ana)?|varshik|साल|सालाना|वार्षिक)",
    )
    .expect("static yearly pattern")
});

/// Extract the interest rate and its method from an utterance, if any
pub fn extract_rate(text: &str) -> Option<RateMatch> {
    let text = normalize_numerals(text);

    if SANKDA_PATTERN.is_match(&text) {
        tracing::debug!("sankda marker present, rate pinned at 12");
        return Some(RateMatch {
            rate: SANKDA_RATE,
            method: InterestMethod::Sankda,
        });
    }

    let caps = PERCENT_PATTERN.captures(&text)?;
    let rate: f64 = caps[1].parse().ok()?;

    // Yearly is the default; an explicit yearly keyword also wins a tie
    let method = match (MONTHLY_PATTERN.is_match(&text), YEARLY_PATTERN.is_match(&text)) {
        (true, false) => InterestMethod::Monthly,
        _ => InterestMethod::Yearly,
    };

    tracing::debug!(rate, ?method, "extracted interest rate");
    Some(RateMatch { rate, method })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sankda_marker_overrides_any_percentage() {
        let m = extract_rate("15% sankda pe").unwrap();
        assert_eq!(m.rate, 12.0);
        assert_eq!(m.method, InterestMethod::Sankda);

        let m = extract_rate("sankda").unwrap();
        assert_eq!(m.rate, 12.0);

        let m = extract_rate("सैकड़ा").unwrap();
        assert_eq!(m.method, InterestMethod::Sankda);
    }

    #[test]
    fn monthly_keyword_classifies_method() {
        let m = extract_rate("2% monthly").unwrap();
        assert_eq!(m.rate, 2.0);
        assert_eq!(m.method, InterestMethod::Monthly);

        let m = extract_rate("2 percent mahina").unwrap();
        assert_eq!(m.method, InterestMethod::Monthly);
    }

    #[test]
    fn yearly_keyword_and_default() {
        let m = extract_rate("12% yearly").unwrap();
        assert_eq!(m.method, InterestMethod::Yearly);

        let m = extract_rate("12 pratishat saalana").unwrap();
        assert_eq!(m.rate, 12.0);
        assert_eq!(m.method, InterestMethod::Yearly);

        // No period keyword: defaults to yearly
        let m = extract_rate("12%").unwrap();
        assert_eq!(m.method, InterestMethod::Yearly);
    }

    #[test]
    fn percent_keyword_is_case_insensitive() {
        assert_eq!(extract_rate("12 Percent").unwrap().rate, 12.0);
        assert_eq!(extract_rate("12 PERCENT yearly").unwrap().rate, 12.0);
    }

    #[test]
    fn fractional_and_zero_rates() {
        assert_eq!(extract_rate("1.5% monthly").unwrap().rate, 1.5);
        assert_eq!(extract_rate("0%").unwrap().rate, 0.0);
    }

    #[test]
    fn no_rate_present() {
        assert!(extract_rate("Raj ko 2 lakh").is_none());
        assert!(extract_rate("hello").is_none());
    }
}
