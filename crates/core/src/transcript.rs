//! Transcript types for voice input
//!
//! Voice I/O delivers interim and final transcripts asynchronously. Interim
//! results may drive a "what I heard" display upstream; only results with
//! `is_final == true` are allowed to reach the dialogue machine.

use serde::{Deserialize, Serialize};

/// A speech-to-text result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcribed text
    pub text: String,
    /// True once the recognizer has committed to this text
    pub is_final: bool,
    /// Recognizer confidence in [0, 1]
    pub confidence: f32,
}

impl TranscriptResult {
    /// A final, stable transcript
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
            confidence: 1.0,
        }
    }

    /// A still-changing partial transcript
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
            confidence: 0.0,
        }
    }
}
