//! Text console for the loan dialogue
//!
//! Reads lines from stdin, feeds each one to a `VoiceSession` as a final
//! transcript, and prints the reply. Useful for exercising the dialogue
//! without any voice transport attached.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use lenden_core::{GeneralAssistant, LedgerStore, SpeechSynthesis, TranscriptResult};
use lenden_dialogue::VoiceSession;
use lenden_ledger::MemoryLedgerStore;

/// Console "speech": replies are printed, not synthesized
struct ConsoleSpeech;

impl SpeechSynthesis for ConsoleSpeech {
    fn speak(&self, text: &str) {
        println!("agent> {text}");
    }
}

/// Minimal fallback for turns outside the loan flow
struct FallbackAssistant;

#[async_trait]
impl GeneralAssistant for FallbackAssistant {
    async fn respond(&self, _utterance: &str, _context_summary: &str) -> String {
        "I can only help with your lending ledger. Say \"add loan\" to record a loan."
            .to_string()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lenden=info")),
        )
        .init();

    let store = Arc::new(MemoryLedgerStore::new());
    let mut session = VoiceSession::new(
        store.clone(),
        Arc::new(ConsoleSpeech),
        Arc::new(FallbackAssistant),
    );

    println!("lenden console. Type your message, or \"bye\" to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"you> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if !line.is_empty() {
            if let Some(turn) = session
                .on_transcript(&TranscriptResult::final_text(line))
                .await
            {
                if let Some(loan) = &turn.committed {
                    tracing::info!(id = %loan.id, borrower = %loan.borrower_name, "loan saved");
                }
            }
        }
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;
    }

    let count = store.list_loans().map(|loans| loans.len()).unwrap_or(0);
    println!("\n{count} loan(s) recorded this session.");
    Ok(())
}
