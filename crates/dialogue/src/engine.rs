//! Dialogue state machine
//!
//! The single `step` entry point takes the session's `ConversationState` and
//! one final utterance, and returns the next prompt plus the committed loan
//! when a confirmation lands. Transition order:
//!
//! 1. `exit` resets from any step.
//! 2. Idle + greeting moves to the engaged sub-mode (capability menu).
//! 3. A loan trigger, or a usable entity while idle/engaged, starts
//!    collection; all extractors run against that first utterance.
//! 4. While collecting, the current slot's extractor runs plus opportunistic
//!    extraction of later slots; a miss re-prompts the same step.
//! 5. Four filled slots move to confirmation with an interest-engine summary.
//! 6. Confirmation: affirm commits, deny discards, a store failure keeps the
//!    session in confirmation for a retry, anything else re-asks yes/no.
//! 7. A deny at any slot step abandons the draft.
//!
//! Extractors are total functions of the text, so `step` can never crash the
//! host session; a miss is always answered with a re-prompt.

use std::sync::Arc;

use lenden_core::{
    final_amount, interest_amount, InterestType, LedgerStore, Loan, LoanTerms, RequiredSlot,
    ResolvedDraft,
};
use lenden_nlu::{
    classify, extract_amount, extract_duration, extract_name, extract_phone, extract_rate,
    IntentLabel,
};

use crate::builder::LoanRecordBuilder;
use crate::prompts;
use crate::state::{ConversationState, Mode, Step};

/// What the caller should do with the turn
#[derive(Debug, Clone, PartialEq)]
pub enum StepReply {
    /// Say this to the user
    Prompt(String),
    /// Outside an active flow and not ours: delegate to the general assistant
    Unhandled,
}

/// Result of processing one utterance
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub reply: StepReply,
    /// Present only on the turn a loan was committed
    pub committed: Option<Loan>,
}

impl StepOutcome {
    fn prompt(text: String) -> Self {
        Self {
            reply: StepReply::Prompt(text),
            committed: None,
        }
    }

    fn unhandled() -> Self {
        Self {
            reply: StepReply::Unhandled,
            committed: None,
        }
    }
}

/// Slot-filling dialogue engine
///
/// Stateless across turns: all mutable conversation state lives in the
/// `ConversationState` the caller threads through `step`, so one engine can
/// serve any number of sessions.
pub struct DialogueEngine {
    builder: LoanRecordBuilder,
}

impl DialogueEngine {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            builder: LoanRecordBuilder::new(store),
        }
    }

    /// Process one final utterance
    pub fn step(&self, state: &mut ConversationState, utterance: &str) -> StepOutcome {
        let intent = classify(utterance, state.slots_filled());
        tracing::debug!(mode = ?state.mode, step = ?state.step, ?intent, "dialogue step");

        // Exit resets regardless of step
        if intent == IntentLabel::Exit {
            state.reset();
            return StepOutcome::prompt(prompts::farewell());
        }

        match state.mode {
            Mode::Confirming => self.confirm_turn(state, intent),
            Mode::Collecting => {
                if intent == IntentLabel::Deny {
                    state.reset();
                    return StepOutcome::prompt(prompts::cancelled());
                }
                self.collect_turn(state, utterance)
            }
            Mode::Idle | Mode::Engaged => self.idle_turn(state, utterance, intent),
        }
    }

    fn idle_turn(
        &self,
        state: &mut ConversationState,
        utterance: &str,
        intent: IntentLabel,
    ) -> StepOutcome {
        match intent {
            IntentLabel::Greeting => {
                state.mode = Mode::Engaged;
                StepOutcome::prompt(prompts::capability_menu())
            }
            IntentLabel::LoanIntent => {
                state.mode = Mode::Collecting;
                self.collect_turn(state, utterance)
            }
            _ => {
                // A strong entity (amount, rate, duration) starts collection
                // even without a trigger phrase; a lone name-shaped utterance
                // does not, to keep casual chat out of the ledger.
                let has_entity = extract_amount(utterance).is_some()
                    || extract_rate(utterance).is_some()
                    || extract_duration(utterance).is_some();
                if has_entity {
                    state.mode = Mode::Collecting;
                    self.collect_turn(state, utterance)
                } else {
                    StepOutcome::unhandled()
                }
            }
        }
    }

    /// One collection turn: fill what we can, then prompt for what's next
    fn collect_turn(&self, state: &mut ConversationState, utterance: &str) -> StepOutcome {
        let before = state.draft.first_missing();
        self.fill_slots(state, utterance);

        match state.draft.first_missing() {
            None => match state.draft.resolve() {
                Some(draft) => {
                    // All four slots present: summarise and ask to confirm
                    state.mode = Mode::Confirming;
                    state.step = Step::Confirm;
                    StepOutcome::prompt(self.summary(&draft))
                }
                // Unreachable with a gap-free draft; re-ask the name to be safe
                None => StepOutcome::prompt(prompts::ask(Step::Name)),
            },
            Some(missing) => {
                state.step = Step::for_slot(missing);
                if before == Some(missing) {
                    // Nothing new for the current slot: re-ask with examples
                    StepOutcome::prompt(prompts::reprompt(state.step))
                } else {
                    StepOutcome::prompt(prompts::ask(state.step))
                }
            }
        }
    }

    /// Run the extractor for the current gap and, opportunistically, for every
    /// later unfilled slot in the same utterance
    fn fill_slots(&self, state: &mut ConversationState, utterance: &str) {
        let start = match state.draft.first_missing() {
            Some(slot) => slot,
            None => return,
        };
        let draft = &mut state.draft;

        if start == RequiredSlot::Name && draft.borrower_name.is_none() {
            if let Some(name) = extract_name(utterance) {
                tracing::debug!(name = %name, "slot filled: borrower name");
                draft.borrower_name = Some(name);
            }
        }
        if start <= RequiredSlot::Amount && draft.amount.is_none() {
            if let Some(amount) = extract_amount(utterance) {
                tracing::debug!(amount, "slot filled: amount");
                draft.amount = Some(amount);
            }
        }
        if start <= RequiredSlot::Rate && draft.interest_rate.is_none() {
            if let Some(rate) = extract_rate(utterance) {
                tracing::debug!(rate = rate.rate, method = ?rate.method, "slot filled: rate");
                // fill_rate pins sankda at 12 here, so the confirmation
                // summary already reflects the override
                draft.fill_rate(rate.rate, rate.method);
            }
        }
        if start <= RequiredSlot::Duration && draft.years.is_none() {
            if let Some(duration) = extract_duration(utterance) {
                tracing::debug!(years = duration.years, "slot filled: duration");
                draft.years = Some(duration.years);
                draft.duration_unit = Some(duration.unit);
            }
        }
        if draft.borrower_phone.is_none() {
            if let Some(phone) = extract_phone(utterance) {
                draft.borrower_phone = Some(phone);
            }
        }
    }

    fn confirm_turn(&self, state: &mut ConversationState, intent: IntentLabel) -> StepOutcome {
        match intent {
            IntentLabel::Affirm => {
                let draft = match state.draft.resolve() {
                    Some(draft) => draft,
                    None => {
                        // Slots went missing underneath us: fall back to
                        // collection rather than committing a bad record
                        state.mode = Mode::Collecting;
                        return self.collect_turn(state, "");
                    }
                };
                match self.builder.commit(&draft) {
                    Ok(loan) => {
                        state.reset();
                        StepOutcome {
                            reply: StepReply::Prompt(prompts::success(&loan)),
                            committed: Some(loan),
                        }
                    }
                    Err(err) => {
                        // Stay in confirmation so the user can retry without
                        // re-entering every slot
                        tracing::warn!(error = %err, "loan commit failed");
                        StepOutcome::prompt(prompts::commit_failed())
                    }
                }
            }
            IntentLabel::Deny => {
                state.reset();
                StepOutcome::prompt(prompts::cancelled())
            }
            // No re-extraction during confirmation
            _ => StepOutcome::prompt(prompts::yes_no_reprompt()),
        }
    }

    fn summary(&self, draft: &ResolvedDraft) -> String {
        let terms = LoanTerms::from_parts(
            draft.amount,
            draft.interest_rate,
            draft.interest_method,
            draft.years,
            InterestType::Simple,
        );
        prompts::confirm_summary(draft, final_amount(&terms), interest_amount(&terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lenden_core::InterestMethod;
    use lenden_ledger::MemoryLedgerStore;

    fn engine_with_store() -> (DialogueEngine, Arc<MemoryLedgerStore>) {
        let store = Arc::new(MemoryLedgerStore::new());
        (DialogueEngine::new(store.clone()), store)
    }

    fn prompt_text(outcome: &StepOutcome) -> &str {
        match &outcome.reply {
            StepReply::Prompt(text) => text,
            StepReply::Unhandled => panic!("expected a prompt, got Unhandled"),
        }
    }

    #[test]
    fn greeting_yields_capability_menu() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        let outcome = engine.step(&mut state, "namaste");
        assert_eq!(state.mode, Mode::Engaged);
        assert!(prompt_text(&outcome).contains("loan"));
    }

    #[test]
    fn small_talk_while_idle_is_unhandled() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        let outcome = engine.step(&mut state, "what is the weather like today");
        assert_eq!(outcome.reply, StepReply::Unhandled);
        assert_eq!(state.mode, Mode::Idle);
    }

    #[test]
    fn loan_trigger_starts_collection_at_name() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "I want to add a loan");
        assert_eq!(state.mode, Mode::Collecting);
        assert_eq!(state.step, Step::Name);
    }

    #[test]
    fn loan_trigger_with_leading_acknowledgement_starts_collection() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "ok add loan");
        assert_eq!(state.mode, Mode::Collecting);
        assert_eq!(state.step, Step::Name);
    }

    #[test]
    fn entity_without_trigger_starts_collection() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "50000 rupees at 12 percent");
        assert_eq!(state.mode, Mode::Collecting);
        assert_eq!(state.draft.amount, Some(50_000.0));
        assert_eq!(state.draft.interest_rate, Some(12.0));
        // Name is still missing, so the step stays at the first gap
        assert_eq!(state.step, Step::Name);
    }

    #[test]
    fn lone_name_does_not_start_collection() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        let outcome = engine.step(&mut state, "check balance for Suresh");
        assert_eq!(outcome.reply, StepReply::Unhandled);
        assert_eq!(state.mode, Mode::Idle);
    }

    #[test]
    fn one_shot_utterance_reaches_confirmation() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        let outcome = engine.step(
            &mut state,
            "loan for Raj of 50000 rupees at 12 percent yearly for 2 years",
        );
        assert_eq!(state.mode, Mode::Confirming);
        assert_eq!(state.step, Step::Confirm);
        let text = prompt_text(&outcome);
        assert!(text.contains("Raj"), "summary missing name: {text}");
        assert!(text.contains("62000"), "summary missing total: {text}");
    }

    #[test]
    fn missed_slot_reprompts_same_step() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "add a loan for Priya");
        assert_eq!(state.step, Step::Amount);

        // No amount in this reply
        let outcome = engine.step(&mut state, "hm let me think");
        assert_eq!(state.step, Step::Amount);
        assert!(prompt_text(&outcome).contains("50000"));
    }

    #[test]
    fn affirm_at_confirmation_commits_and_resets() {
        let (engine, store) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "udhar for Priya");
        engine.step(&mut state, "2 lakh");
        engine.step(&mut state, "sankda");
        engine.step(&mut state, "1 saal");
        assert_eq!(state.mode, Mode::Confirming);

        let outcome = engine.step(&mut state, "yes");
        let loan = outcome.committed.expect("loan should be committed");
        assert_eq!(loan.borrower_name, "Priya");
        assert_eq!(loan.amount, 200_000.0);
        assert_eq!(loan.interest_rate, 12.0);
        assert_eq!(loan.interest_method, InterestMethod::Sankda);
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(store.list_loans().unwrap().len(), 1);
    }

    #[test]
    fn deny_at_confirmation_discards_draft() {
        let (engine, store) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "loan for Raj of 50000 at 2% monthly for 1 year");
        assert_eq!(state.mode, Mode::Confirming);

        let outcome = engine.step(&mut state, "no");
        assert_eq!(outcome.committed, None);
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.draft, lenden_core::LoanDraft::default());
        assert!(store.list_loans().unwrap().is_empty());
    }

    #[test]
    fn unclear_confirmation_reply_asks_yes_or_no() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "loan for Raj of 50000 at 2% monthly for 1 year");
        let outcome = engine.step(&mut state, "maybe 60000 actually");
        // No re-extraction at confirmation; the draft keeps its values
        assert_eq!(state.draft.amount, Some(50_000.0));
        assert!(prompt_text(&outcome).contains("yes"));
        assert_eq!(state.mode, Mode::Confirming);
    }

    #[test]
    fn exit_resets_from_any_step() {
        let (engine, _) = engine_with_store();

        for utterances in [
            vec!["add a loan"],
            vec!["add a loan", "Priya"],
            vec!["add a loan", "Priya", "2 lakh"],
            vec!["loan for Raj of 50000 at 12% yearly for 1 year"],
        ] {
            let mut state = ConversationState::new();
            for utterance in utterances {
                engine.step(&mut state, utterance);
            }
            let outcome = engine.step(&mut state, "bye");
            assert_eq!(state.mode, Mode::Idle);
            assert_eq!(state.draft, lenden_core::LoanDraft::default());
            assert!(prompt_text(&outcome).contains("bye"));
        }
    }

    #[test]
    fn deny_during_collection_cancels() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "add a loan for Priya");
        let outcome = engine.step(&mut state, "nahi cancel it");
        assert_eq!(state.mode, Mode::Idle);
        assert!(prompt_text(&outcome).contains("discarded"));
    }

    #[test]
    fn quota_failure_keeps_confirmation_for_retry() {
        let store = Arc::new(MemoryLedgerStore::with_capacity_limit(0));
        let engine = DialogueEngine::new(store);
        let mut state = ConversationState::new();

        engine.step(&mut state, "loan for Raj of 50000 at 12% yearly for 1 year");
        let outcome = engine.step(&mut state, "yes");
        assert_eq!(outcome.committed, None);
        assert_eq!(state.mode, Mode::Confirming);
        // The draft survives, so a later retry needs no re-entry
        assert_eq!(state.draft.amount, Some(50_000.0));
    }

    #[test]
    fn phone_number_is_captured_opportunistically() {
        let (engine, _) = engine_with_store();
        let mut state = ConversationState::new();

        engine.step(&mut state, "add a loan for Priya, her number is 9876543210");
        assert_eq!(state.draft.borrower_phone.as_deref(), Some("9876543210"));
        // The ten digit phone must not leak into the amount slot
        assert_eq!(state.draft.amount, None);
    }
}
