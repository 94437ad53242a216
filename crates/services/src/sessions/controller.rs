use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;

use aptitude_core::Clock;
use aptitude_core::model::{AssessmentResult, AssessmentSettings, Question, UserAnswer};
use bank::QuestionBank;

use super::phase::{Feedback, IgnoreReason, Phase, Transition};
use super::progress::SessionProgress;
use super::scoring;
use super::view::SessionSnapshot;
use crate::error::SessionError;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns one assessment run: phase, question pointer, answers and the clock.
///
/// Phases only move forward (`Welcome -> Instructions -> Assessment -> Summary`)
/// until [`SessionController::retake`] resets everything. Every intent returns a
/// [`Transition`]; an ignored intent leaves the session exactly as it was.
///
/// Wall-clock stamps live here rather than in the [`AssessmentResult`], so a
/// replayed run produces an equal result.
pub struct SessionController {
    bank: QuestionBank,
    settings: AssessmentSettings,
    /// Clock as handed to `new`; `retake` starts over from it.
    initial_clock: Clock,
    clock: Clock,
    phase: Phase,
    current_index: usize,
    selected: Option<usize>,
    feedback: Feedback,
    answers: Vec<UserAnswer>,
    completed: BTreeSet<usize>,
    elapsed_secs: u32,
    question_started_secs: u32,
    reinforcement_active: bool,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    result: Option<AssessmentResult>,
}

impl SessionController {
    /// Create a session in the `Welcome` phase over the given bank.
    #[must_use]
    pub fn new(bank: QuestionBank, settings: AssessmentSettings, clock: Clock) -> Self {
        Self {
            bank,
            settings,
            initial_clock: clock,
            clock,
            phase: Phase::Welcome,
            current_index: 0,
            selected: None,
            feedback: Feedback::None,
            answers: Vec::new(),
            completed: BTreeSet::new(),
            elapsed_secs: 0,
            question_started_secs: 0,
            reinforcement_active: false,
            started_at: None,
            completed_at: None,
            result: None,
        }
    }

    /// Create a session over the built-in question bank.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Bank` if the embedded bank fails to load.
    pub fn builtin(settings: AssessmentSettings, clock: Clock) -> Result<Self, SessionError> {
        Ok(Self::new(QuestionBank::builtin()?, settings, clock))
    }

    //
    // ─── INTENTS ───────────────────────────────────────────────────────────────
    //

    /// `Welcome -> Instructions`.
    pub fn start_instructions(&mut self) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Welcome) {
            return ignored("start_instructions", reason);
        }
        self.phase = Phase::Instructions;
        tracing::debug!(phase = %self.phase, "showing instructions");
        Transition::Applied
    }

    /// `Instructions -> Assessment`: starts the clock on the first question.
    pub fn begin_assessment(&mut self) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Instructions) {
            return ignored("begin_assessment", reason);
        }
        self.phase = Phase::Assessment;
        self.current_index = 0;
        self.question_started_secs = self.elapsed_secs;
        self.started_at = Some(self.clock.now());
        tracing::debug!(questions = self.bank.len(), "assessment started");
        Transition::Applied
    }

    /// Tentatively select an option. Ignored once the answer has been checked.
    pub fn select_option(&mut self, index: usize) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Assessment) {
            return ignored("select_option", reason);
        }
        if self.feedback.is_shown() {
            return ignored("select_option", IgnoreReason::AlreadyChecked);
        }
        let options = self.active_question().option_count();
        if index >= options {
            return ignored(
                "select_option",
                IgnoreReason::OptionOutOfRange { index, options },
            );
        }
        self.selected = Some(index);
        Transition::Applied
    }

    /// Confirm the selected option, append it to the answer log and show feedback.
    pub fn check_answer(&mut self) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Assessment) {
            return ignored("check_answer", reason);
        }
        if self.feedback.is_shown() {
            return ignored("check_answer", IgnoreReason::AlreadyChecked);
        }
        let Some(selected) = self.selected else {
            return ignored("check_answer", IgnoreReason::NothingSelected);
        };

        let time_spent = self.elapsed_secs.saturating_sub(self.question_started_secs);
        let answer = UserAnswer::record(
            self.active_question(),
            selected,
            time_spent,
            self.reinforcement_active,
        );
        let is_correct = answer.is_correct();

        tracing::debug!(
            question = %answer.question_id(),
            selected,
            is_correct,
            time_spent,
            reinforcement = self.reinforcement_active,
            "answer checked"
        );
        self.answers.push(answer);

        if is_correct {
            self.feedback = Feedback::Correct;
            if !self.reinforcement_active {
                self.completed.insert(self.current_index + 1);
            }
        } else {
            self.feedback = Feedback::Incorrect;
        }
        Transition::Applied
    }

    /// Swap in the reinforcement question after an incorrect primary answer.
    ///
    /// The bank pointer stays where it is.
    pub fn try_reinforcement(&mut self) -> Transition {
        if let Err(reason) = self.reinforcement_available() {
            return ignored("try_reinforcement", reason);
        }
        self.reinforcement_active = true;
        self.selected = None;
        self.feedback = Feedback::None;
        self.question_started_secs = self.elapsed_secs;
        tracing::debug!(question = %self.active_question().id(), "reinforcement question shown");
        Transition::Applied
    }

    /// Move past a checked question: to the next bank question, or to the
    /// summary after the last one.
    pub fn proceed(&mut self) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Assessment) {
            return ignored("proceed", reason);
        }
        if !self.feedback.is_shown() {
            return ignored("proceed", IgnoreReason::NotChecked);
        }

        if self.current_index + 1 < self.bank.len() {
            self.current_index += 1;
            self.selected = None;
            self.feedback = Feedback::None;
            self.reinforcement_active = false;
            self.question_started_secs = self.elapsed_secs;
            tracing::debug!(question = self.current_index + 1, "next question");
        } else {
            self.finish();
        }
        Transition::Applied
    }

    /// Reset the whole session back to `Welcome`. Accepted from any phase.
    ///
    /// The wall clock is rewound to the one the session was created with.
    pub fn retake(&mut self) -> Transition {
        tracing::debug!(from = %self.phase, "retaking assessment");
        let bank = self.bank.clone();
        *self = Self::new(bank, self.settings, self.initial_clock);
        Transition::Applied
    }

    /// Set the elapsed assessment time. Only honoured during the assessment and
    /// never backwards.
    pub fn advance_clock(&mut self, elapsed_secs: u32) -> Transition {
        if let Err(reason) = self.require_phase(Phase::Assessment) {
            return ignored("advance_clock", reason);
        }
        if elapsed_secs < self.elapsed_secs {
            return ignored(
                "advance_clock",
                IgnoreReason::ClockBackwards {
                    current: self.elapsed_secs,
                    requested: elapsed_secs,
                },
            );
        }
        self.clock.advance_secs(elapsed_secs - self.elapsed_secs);
        self.elapsed_secs = elapsed_secs;
        Transition::Applied
    }

    /// One periodic clock tick (one second).
    pub fn tick(&mut self) -> Transition {
        self.advance_clock(self.elapsed_secs.saturating_add(1))
    }

    //
    // ─── STATE ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> &AssessmentSettings {
        &self.settings
    }

    /// 0-based pointer into the bank. Frozen while a reinforcement question is active.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen: the bank question or its reinforcement substitute.
    #[must_use]
    pub fn active_question(&self) -> &Question {
        let primary = &self.bank.questions()[self.current_index];
        if self.reinforcement_active {
            primary.reinforcement().unwrap_or(primary)
        } else {
            primary
        }
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn completed_numbers(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn is_reinforcement_active(&self) -> bool {
        self.reinforcement_active
    }

    /// True when [`SessionController::try_reinforcement`] would be applied.
    #[must_use]
    pub fn can_try_reinforcement(&self) -> bool {
        self.reinforcement_available().is_ok()
    }

    /// Final result; only present in the summary phase.
    #[must_use]
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Wall-clock time the assessment phase was entered.
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Wall-clock time the summary was reached.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            current: self.current_index + 1,
            total: self.bank.len(),
            completed: self.completed.clone(),
            answered: self.answers.len(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let in_assessment = self.phase == Phase::Assessment;
        SessionSnapshot {
            phase: self.phase,
            active_question: in_assessment.then(|| self.active_question()),
            selected_option: self.selected,
            feedback: self.feedback,
            progress: self.progress(),
            elapsed_secs: self.elapsed_secs,
            is_reinforcement_active: self.reinforcement_active,
            can_try_reinforcement: self.can_try_reinforcement(),
            result: self.result.as_ref(),
            completed_at: self.completed_at,
        }
    }

    //
    // ─── HELPERS ───────────────────────────────────────────────────────────────
    //

    fn require_phase(&self, expected: Phase) -> Result<(), IgnoreReason> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IgnoreReason::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn reinforcement_available(&self) -> Result<(), IgnoreReason> {
        self.require_phase(Phase::Assessment)?;
        if self.feedback != Feedback::Incorrect {
            return Err(IgnoreReason::NotIncorrect);
        }
        if self.reinforcement_active {
            return Err(IgnoreReason::ReinforcementActive);
        }
        if self.active_question().reinforcement().is_none() {
            return Err(IgnoreReason::NoReinforcement);
        }
        Ok(())
    }

    fn finish(&mut self) {
        let result = scoring::score(&self.bank, &self.answers, self.elapsed_secs, &self.settings);
        tracing::info!(
            correct = result.correct_answers(),
            total = result.total_questions(),
            accuracy = result.accuracy_percent(),
            seconds = result.total_time_secs(),
            "assessment completed"
        );
        self.completed_at = Some(self.clock.now());
        self.result = Some(result);
        self.phase = Phase::Summary;
    }
}

fn ignored(intent: &'static str, reason: IgnoreReason) -> Transition {
    tracing::trace!(intent, %reason, "intent ignored");
    Transition::Ignored(reason)
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase)
            .field("bank_len", &self.bank.len())
            .field("current_index", &self.current_index)
            .field("selected", &self.selected)
            .field("feedback", &self.feedback)
            .field("answers_len", &self.answers.len())
            .field("elapsed_secs", &self.elapsed_secs)
            .field("reinforcement_active", &self.reinforcement_active)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
