//! Intent classification
//!
//! Categorizes an utterance as greeting, loan-creation trigger, affirmation,
//! negation, exit, or unrecognized. Classification is ordered and exclusive:
//! exit outranks affirm/deny (a "bye" must never confirm anything), deny is
//! checked before affirm where tokens could overlap, and greeting is checked
//! only while no loan slot has been filled yet — mid-flow, a short "hi" is
//! more likely part of a borrower's name than a real salutation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Intent label for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    Greeting,
    LoanIntent,
    Affirm,
    Deny,
    Exit,
    /// Delegate to the general assistant
    Unrecognized,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static intent pattern must compile"))
        .collect()
}

/// Bye/close/quit family; checked first so "ok bye" never reads as affirm
static EXIT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(?:good)?bye+\b",
        r"(?i)\btata\b",
        r"(?i)\balvida\b",
        r"(?i)\b(?:exit|quit|close)\b",
        r"(?i)\bband\s+(?:karo?|kar\s+do)\b",
        r"बंद\s*करो",
        r"अलविदा",
    ])
});

/// No/cancel vocabulary; checked before affirm
static DENY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(?:no+|nope|nah|na)\b",
        r"(?i)\bnah?i+n?\b",
        r"(?i)\bnhi\b",
        r"(?i)\bmat\s+(?:karo?|do)\b",
        r"(?i)\bcancel(?:\s+karo?)?\b",
        r"(?i)\brehne\s+d[eo]\b",
        r"(?i)\bchho?do\b",
        r"(?i)\b(?:galat|wrong)\b",
        r"(?i)\bdon'?t\b",
        r"नहीं",
        r"\bना\b",
        r"रद्द",
        r"गलत",
    ])
});

/// Yes vocabulary across both languages
static AFFIRM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(?:yes+|yeah|yep|yup)\b",
        r"(?i)\b(?:ok(?:ay)?|sure|confirm(?:ed)?|correct|right|done)\b",
        r"(?i)\bha+n?\b",
        r"(?i)\bji(?:\s+ha+n?)?\b",
        r"(?i)\bth(?:ee|i)k\s+hai\b",
        r"(?i)\bsahi\s+hai\b",
        r"(?i)\bbilkul\b",
        r"(?i)\bpakka\b",
        r"(?i)\bkar\s+do\b",
        r"हाँ",
        r"हां",
        r"\bजी\b",
        r"ठीक\s*है",
        r"सही\s*है",
        r"बिल्कुल",
    ])
});

/// Direct keywords and "<name> ko loan" style structural patterns
static LOAN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(?:add|create|new|naya)\s+(?:a\s+)?loan\b",
        r"(?i)\bloan\s+(?:add|create|do|dena|banao)\b",
        r"(?i)\bloan\s+(?:for|to)\s+\w+",
        r"(?i)\b\w+\s+ko\s+(?:loan|udha{1,2}r|karza?)\b",
        r"(?i)\budha{1,2}r\b",
        r"(?i)\bkarza?\b",
        r"(?i)\b(?:lend|lent)\b",
        r"(?i)\bpaise?\s+(?:diye|dene)\b",
        r"उधार",
        r"कर्ज़?ा?",
    ])
});

/// Salutations, exact and fuzzy ("hii", "heyy"); deliberately excludes the
/// bye family, which EXIT_PATTERNS claims first
static GREETING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)^\s*hi+\b",
        r"(?i)\bhell?o+\b",
        r"(?i)\bhey+\b",
        r"(?i)\bnamastey?\b",
        r"(?i)\bnamaskar\b",
        r"(?i)\bgood\s+(?:morning|afternoon|evening)\b",
        r"(?i)\bhow\s+are\s+you\b",
        r"(?i)\bkaise\s+ho\b",
        r"(?i)\bkya\s+haal\b",
        r"नमस्ते",
        r"नमस्कार",
        r"हेलो",
    ])
});

/// Tokens that can never be a borrower name on their own
///
/// The name extractor's whole-utterance fallback consults this list so a bare
/// "hi" or "no" is never mistaken for a borrower named Hi or No.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // greetings / farewells
        "hi", "hii", "hello", "helo", "hey", "namaste", "namaskar", "bye", "goodbye", "tata",
        "alvida", "good", "morning", "afternoon", "evening",
        // yes / no / command verbs
        "yes", "yeah", "yep", "no", "nope", "nah", "na", "ok", "okay", "sure", "confirm",
        "correct", "right", "done", "haan", "han", "ha", "ji", "nahi", "nahin", "nhi", "mat",
        "theek", "thik", "sahi", "bilkul", "pakka", "cancel", "stop", "exit", "quit", "close",
        "band", "karo", "kar", "do", "add", "create", "new", "naya", "banao", "galat", "wrong",
        // domain keywords
        "loan", "udhaar", "udhar", "karz", "karza", "interest", "byaj", "rate", "percent",
        "sankda", "amount", "paisa", "paise", "rupees", "rupee", "rupaye", "rs", "lakh", "lac",
        "crore", "thousand", "hajar", "hazaar", "year", "years", "saal", "month", "months",
        "mahina", "mahine", "lend", "lent",
        // connectives / markers stripped during name cleaning
        "name", "naam", "is", "hai", "ka", "ki", "ke", "ko", "se", "pe", "par", "liye", "for",
        "to", "of", "the", "mera", "mere", "uska", "uski", "a", "an",
    ]
    .into_iter()
    .collect()
});

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Classify one utterance
///
/// `slots_filled` reports whether any loan slot holds a value in the current
/// session; when true, greeting classification is suppressed.
pub fn classify(text: &str, slots_filled: bool) -> IntentLabel {
    let text = text.trim();
    if text.is_empty() {
        return IntentLabel::Unrecognized;
    }

    let label = if any_match(&EXIT_PATTERNS, text) {
        IntentLabel::Exit
    } else if any_match(&DENY_PATTERNS, text) {
        IntentLabel::Deny
    } else if any_match(&LOAN_PATTERNS, text) {
        // Loan triggers outrank affirm so "ok add loan" starts a flow
        // instead of reading as a bare acknowledgement
        IntentLabel::LoanIntent
    } else if any_match(&AFFIRM_PATTERNS, text) {
        IntentLabel::Affirm
    } else if !slots_filled && any_match(&GREETING_PATTERNS, text) {
        IntentLabel::Greeting
    } else {
        IntentLabel::Unrecognized
    };

    tracing::debug!(?label, slots_filled, "classified utterance");
    label
}

/// True if the token belongs to the non-name vocabulary
pub fn is_reserved_word(token: &str) -> bool {
    RESERVED_WORDS.contains(token.to_lowercase().as_str())
}
