//! Borrower name extraction
//!
//! Tries, in order, phrase templates that capture a proper-noun span next to
//! marker words meaning name/for/to in either language. Only when no template
//! fires does it fall back to treating the whole trimmed utterance as a name
//! candidate, and then only for short, purely alphabetic text that contains no
//! reserved vocabulary: a bare "hi" or "no" must never become a borrower
//! named Hi or No.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::intent::is_reserved_word;

/// Fallback accepts at most this many words
const MAX_FALLBACK_WORDS: usize = 4;

static NAME_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "name is Raj", "naam Raj hai"
        r"(?i)\bname\s+(?:is\s+)?(\p{L}+(?:\s+\p{L}+){0,2})",
        r"(?i)\bnaam\s+(\p{L}+(?:\s+\p{L}+){0,2})",
        // "loan for Priya", "udhar to Aman"
        r"(?i)\b(?:loan|udha{1,2}r|karza?)\s+(?:for|to)\s+(\p{L}+(?:\s+\p{L}+){0,2})",
        r"(?i)\bon\s+behalf\s+of\s+(\p{L}+(?:\s+\p{L}+){0,2})",
        r"(?i)\bfor\s+(\p{L}+(?:\s+\p{L}+){0,2})",
        r"(?i)\bto\s+(\p{L}+(?:\s+\p{L}+){0,2})",
        // "Raj ko", "Priya ke liye"
        r"(?i)\b(\p{L}+)\s+ko\b",
        r"(?i)\b(\p{L}+)\s+ke\s+liye\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static name template must compile"))
    .collect()
});

/// Strip marker/stop words from a captured span and title-case the rest
fn clean_candidate(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .unicode_words()
        .filter(|w| !is_reserved_word(w))
        .collect();
    if words.is_empty() {
        return None;
    }
    Some(
        words
            .iter()
            .map(|w| title_case(w))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Extract a borrower name from an utterance, if any
pub fn extract_name(text: &str) -> Option<String> {
    for template in NAME_TEMPLATES.iter() {
        if let Some(caps) = template.captures(text) {
            if let Some(name) = clean_candidate(&caps[1]) {
                tracing::debug!(name = %name, "extracted borrower name via template");
                return Some(name);
            }
        }
    }

    // Whole-utterance fallback: short, alphabetic, nothing reserved. Numeric
    // tokens are ignored rather than fatal so "Raj 50000" still yields a name
    // while the amount extractor claims the number.
    let all_words: Vec<&str> = text.trim().unicode_words().collect();
    if all_words.is_empty() || all_words.len() > MAX_FALLBACK_WORDS {
        return None;
    }
    let words: Vec<&str> = all_words
        .iter()
        .copied()
        .filter(|w| !w.chars().any(|c| c.is_numeric()))
        .collect();
    if words.is_empty()
        || !words.iter().all(|w| w.chars().all(|c| c.is_alphabetic()))
        || words.iter().any(|w| is_reserved_word(w))
    {
        return None;
    }

    let name = words
        .iter()
        .map(|w| title_case(w))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(name = %name, "extracted borrower name via fallback");
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_templates() {
        assert_eq!(extract_name("name is raj"), Some("Raj".into()));
        assert_eq!(extract_name("uska naam priya hai"), Some("Priya".into()));
        assert_eq!(extract_name("loan for aman kumar"), Some("Aman Kumar".into()));
        assert_eq!(extract_name("Raj ko 2 lakh"), Some("Raj".into()));
        assert_eq!(extract_name("priya ke liye udhar"), Some("Priya".into()));
    }

    #[test]
    fn marker_noise_is_stripped() {
        // "hai" after the name is stop-listed, not part of the name
        assert_eq!(extract_name("naam sunita hai"), Some("Sunita".into()));
    }

    #[test]
    fn fallback_accepts_bare_names() {
        assert_eq!(extract_name("Priya"), Some("Priya".into()));
        assert_eq!(extract_name("amit kumar sharma"), Some("Amit Kumar Sharma".into()));
        assert_eq!(extract_name("  raj  "), Some("Raj".into()));
    }

    #[test]
    fn fallback_rejects_reserved_vocabulary() {
        assert_eq!(extract_name("hi"), None);
        assert_eq!(extract_name("no"), None);
        assert_eq!(extract_name("loan"), None);
        assert_eq!(extract_name("add loan"), None);
        assert_eq!(extract_name("sankda"), None);
    }

    #[test]
    fn fallback_rejects_long_or_purely_numeric_text() {
        assert_eq!(extract_name("please give me something else entirely today"), None);
        assert_eq!(extract_name("50000"), None);
    }

    #[test]
    fn fallback_skips_numeric_tokens() {
        // One line can carry both a name and an amount
        assert_eq!(extract_name("raj 50000"), Some("Raj".into()));
    }

    #[test]
    fn title_casing() {
        assert_eq!(extract_name("PRIYA"), Some("Priya".into()));
        assert_eq!(extract_name("rAj"), Some("Raj".into()));
    }
}
