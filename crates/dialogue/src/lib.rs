//! Conversational loan-creation engine
//!
//! A natural-language, multi-turn, slot-filling dialogue that turns free-form
//! text or voice transcripts ("Raj ko 2 lakh ka loan 12% sankda pe") into a
//! fully-specified loan record.
//!
//! Features:
//! - Explicit conversation state threaded through a pure `step` entry point
//! - Opportunistic multi-slot extraction from a single utterance
//! - Correction/cancellation handling at every step
//! - Pre-commit summary computed by the interest engine
//! - Final-transcript gating for voice input

pub mod builder;
pub mod engine;
pub mod prompts;
pub mod session;
pub mod state;

pub use builder::LoanRecordBuilder;
pub use engine::{DialogueEngine, StepOutcome, StepReply};
pub use session::VoiceSession;
pub use state::{ConversationState, Mode, Step};
