use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// One confirmed "check answer" action.
///
/// Built once when the answer is checked and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    question_id: QuestionId,
    selected_index: usize,
    is_correct: bool,
    time_spent_secs: u32,
    is_reinforcement: bool,
}

impl UserAnswer {
    /// Record an answer to `question`, grading it against the correct index.
    #[must_use]
    pub fn record(
        question: &Question,
        selected_index: usize,
        time_spent_secs: u32,
        is_reinforcement: bool,
    ) -> Self {
        Self {
            question_id: question.id().clone(),
            selected_index,
            is_correct: question.is_correct(selected_index),
            time_spent_secs,
            is_reinforcement,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    #[must_use]
    pub fn time_spent_secs(&self) -> u32 {
        self.time_spent_secs
    }

    /// True when this answer was given on a reinforcement question.
    #[must_use]
    pub fn is_reinforcement(&self) -> bool {
        self.is_reinforcement
    }
}
