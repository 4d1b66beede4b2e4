//! Borrower phone extraction
//!
//! Indian 10-digit mobile numbers, optionally +91/91 prefixed. The phone slot
//! is optional and never prompted for; it is only filled when a number shows
//! up in passing.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?91[\s-]?)?([6-9]\d{9})\b").expect("static phone pattern")
});

/// Extract a borrower phone number from an utterance, if any
pub fn extract_phone(text: &str) -> Option<String> {
    let caps = PHONE_PATTERN.captures(text)?;
    let phone = caps[1].to_string();
    tracing::debug!(phone = %phone, "extracted borrower phone");
    Some(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_prefixed_numbers() {
        assert_eq!(extract_phone("number 9876543210"), Some("9876543210".into()));
        assert_eq!(extract_phone("+91 8765432109"), Some("8765432109".into()));
    }

    #[test]
    fn short_or_missing_numbers() {
        assert_eq!(extract_phone("50000"), None);
        assert_eq!(extract_phone("call me"), None);
    }
}
