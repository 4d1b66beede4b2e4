//! Voice session wrapper
//!
//! Owns the per-conversation state and connects the dialogue engine to the
//! voice transport: interim transcripts are dropped, final ones are stepped
//! through the engine, and unrecognized turns outside a loan flow fall back
//! to the general assistant. Every spoken reply also goes through the speech
//! backend.

use std::sync::Arc;

use lenden_core::{GeneralAssistant, LedgerStore, Loan, SpeechSynthesis, TranscriptResult};

use crate::engine::{DialogueEngine, StepReply};
use crate::state::{ConversationState, Mode};

/// One user's conversation, from first transcript to commit or exit
pub struct VoiceSession {
    engine: DialogueEngine,
    state: ConversationState,
    speech: Arc<dyn SpeechSynthesis>,
    assistant: Arc<dyn GeneralAssistant>,
}

/// Spoken reply for one final transcript
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTurn {
    pub reply: String,
    /// Set on the turn a loan was saved
    pub committed: Option<Loan>,
}

impl VoiceSession {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        speech: Arc<dyn SpeechSynthesis>,
        assistant: Arc<dyn GeneralAssistant>,
    ) -> Self {
        Self {
            engine: DialogueEngine::new(store),
            state: ConversationState::new(),
            speech,
            assistant,
        }
    }

    /// Handle one transcript from the recognizer
    ///
    /// Interim results are ignored entirely: the dialogue must only ever act
    /// on text the recognizer has finalized, otherwise a half-heard "no loan
    /// for..." could cancel a draft mid-sentence. Returns `None` for dropped
    /// interim input.
    pub async fn on_transcript(&mut self, transcript: &TranscriptResult) -> Option<SessionTurn> {
        if !transcript.is_final {
            tracing::trace!(text = %transcript.text, "dropping interim transcript");
            return None;
        }

        let outcome = self.engine.step(&mut self.state, &transcript.text);
        let turn = match outcome.reply {
            StepReply::Prompt(reply) => SessionTurn {
                reply,
                committed: outcome.committed,
            },
            StepReply::Unhandled => {
                let reply = self
                    .assistant
                    .respond(&transcript.text, &self.context_summary())
                    .await;
                SessionTurn {
                    reply,
                    committed: None,
                }
            }
        };

        self.speech.speak(&turn.reply);
        Some(turn)
    }

    /// Short context line handed to the general assistant
    fn context_summary(&self) -> String {
        match self.state.mode {
            Mode::Idle => "no active loan conversation".to_string(),
            _ => format!("loan conversation in progress, at the {:?} step", self.state.step),
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }
}
