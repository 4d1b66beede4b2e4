//! Entity extractors
//!
//! Independent, order-insensitive parsers over raw utterance text. The
//! dialogue machine runs them opportunistically, so a single sentence like
//! "Raj ko 2 lakh ka loan 12% sankda pe" can fill several slots at once.
//! Each extractor returns `None` on a miss; the machine turns that into a
//! re-prompt, never a failure.

pub mod amount;
pub mod duration;
pub mod name;
pub mod phone;
pub mod rate;

pub use amount::extract_amount;
pub use duration::{extract_duration, DurationMatch};
pub use name::extract_name;
pub use phone::extract_phone;
pub use rate::{extract_rate, RateMatch};

/// Convert Devanagari numerals to ASCII digits so one pattern set covers both
pub(crate) fn normalize_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '०' => '0',
            '१' => '1',
            '२' => '2',
            '३' => '3',
            '४' => '4',
            '५' => '5',
            '६' => '6',
            '७' => '7',
            '८' => '8',
            '९' => '9',
            other => other,
        })
        .collect()
}
