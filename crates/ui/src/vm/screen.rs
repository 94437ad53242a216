use aptitude_core::model::{Difficulty, Question};
use services::{Feedback, Phase, SessionSnapshot};

use crate::vm::progress_vm::{ProgressVm, map_progress};
use crate::vm::session_summary_vm::SessionSummaryVm;
use crate::vm::time_fmt::format_clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    /// The right answer, revealed once feedback is shown.
    Correct,
    /// The user's wrong pick.
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackPanel {
    Success {
        explanation: String,
    },
    LearningMode {
        concept: String,
        tip: String,
        explanation: String,
        correct_option: String,
        can_try_similar: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreen {
    pub question_id: String,
    pub category_label: &'static str,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub is_reinforcement: bool,
    pub options: Vec<OptionVm>,
    /// The check button is shown until feedback appears.
    pub show_check: bool,
    pub check_enabled: bool,
    pub feedback: Option<FeedbackPanel>,
    pub progress: ProgressVm,
    pub clock_label: String,
}

/// What the presentation layer should draw for the current session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Instructions,
    Question(Box<QuestionScreen>),
    Summary(Box<SessionSummaryVm>),
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}

fn option_state(
    question: &Question,
    index: usize,
    selected: Option<usize>,
    feedback: Feedback,
) -> OptionState {
    let is_selected = selected == Some(index);
    let is_correct = question.is_correct(index);
    if feedback.is_shown() && is_correct {
        OptionState::Correct
    } else if feedback == Feedback::Incorrect && is_selected {
        OptionState::Incorrect
    } else if is_selected {
        OptionState::Selected
    } else {
        OptionState::Idle
    }
}

fn question_screen(snapshot: &SessionSnapshot<'_>, question: &Question) -> QuestionScreen {
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            letter: option_letter(index),
            text: text.clone(),
            state: option_state(question, index, snapshot.selected_option, snapshot.feedback),
            enabled: !snapshot.feedback.is_shown(),
        })
        .collect();

    let feedback = match (snapshot.feedback, snapshot.selected_option) {
        (Feedback::Correct, _) => Some(FeedbackPanel::Success {
            explanation: question.explanation().to_string(),
        }),
        (Feedback::Incorrect, Some(_)) => Some(FeedbackPanel::LearningMode {
            concept: question.concept().to_string(),
            tip: question.tip().to_string(),
            explanation: question.explanation().to_string(),
            correct_option: question
                .options()
                .get(question.correct_answer_index())
                .cloned()
                .unwrap_or_default(),
            can_try_similar: snapshot.can_try_reinforcement,
        }),
        _ => None,
    };

    QuestionScreen {
        question_id: question.id().to_string(),
        category_label: question.category().label(),
        difficulty: question.difficulty(),
        prompt: question.prompt().to_string(),
        is_reinforcement: snapshot.is_reinforcement_active,
        options,
        show_check: !snapshot.feedback.is_shown(),
        check_enabled: snapshot.selected_option.is_some() && !snapshot.feedback.is_shown(),
        feedback,
        progress: map_progress(&snapshot.progress),
        clock_label: format_clock(snapshot.elapsed_secs),
    }
}

/// Pure mapping from a session snapshot to the screen to draw.
#[must_use]
pub fn describe(snapshot: &SessionSnapshot<'_>) -> Screen {
    match snapshot.phase {
        Phase::Welcome => Screen::Welcome,
        Phase::Instructions => Screen::Instructions,
        Phase::Assessment => match snapshot.active_question {
            Some(question) => Screen::Question(Box::new(question_screen(snapshot, question))),
            None => Screen::Instructions,
        },
        Phase::Summary => match snapshot.result {
            Some(result) => Screen::Summary(Box::new(SessionSummaryVm::new(
                result,
                snapshot.completed_at,
            ))),
            None => Screen::Welcome,
        },
    }
}
