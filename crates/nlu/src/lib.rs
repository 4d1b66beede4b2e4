//! Intent classification and entity extraction
//!
//! Rule-based understanding for loan-creation conversations. Supports
//! English, romanized Hindi, and Devanagari utterances.
//!
//! All extractors are pure functions of the raw text: absence of a match is a
//! miss (`None`), never an error, and the dialogue machine treats a miss as
//! "re-prompt this slot". Pattern tables live as data behind `Lazy` statics so
//! the precedence rules are auditable and independently testable.

pub mod extract;
pub mod intent;

pub use extract::{
    extract_amount, extract_duration, extract_name, extract_phone, extract_rate, DurationMatch,
    RateMatch,
};
pub use intent::{classify, is_reserved_word, IntentLabel};
