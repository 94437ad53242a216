use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question {id} needs at least 2 options, found {found}")]
    TooFewOptions { id: QuestionId, found: usize },

    #[error("question {id} has correct answer index {index} but only {options} options")]
    CorrectAnswerOutOfRange {
        id: QuestionId,
        index: usize,
        options: usize,
    },

    #[error("reinforcement question {id} cannot carry its own reinforcement question")]
    NestedReinforcement { id: QuestionId },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Topical tag used for the per-category score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Quantitative,
    Logical,
    Verbal,
    Analytical,
}

impl Category {
    /// Every category, in the order results are reported.
    pub const ALL: [Category; 4] = [
        Category::Quantitative,
        Category::Logical,
        Category::Verbal,
        Category::Analytical,
    ];

    /// Lowercase key used in bank files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Quantitative => "quantitative",
            Category::Logical => "logical",
            Category::Verbal => "verbal",
            Category::Analytical => "analytical",
        }
    }

    /// Human-readable label used for strengths and improvements.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Quantitative => "Quantitative",
            Category::Logical => "Logical Reasoning",
            Category::Verbal => "Verbal Ability",
            Category::Analytical => "Analytical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| QuestionError::UnknownCategory(s.to_owned()))
    }
}

/// Informational difficulty tag. Scoring ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One step of the learning-mode walk-through shown after a wrong answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStep {
    pub title: String,
    pub content: String,
    pub emoji: String,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, e.g. decoded from a bank file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
    pub concept: String,
    pub tip: String,
    pub difficulty: Difficulty,
    pub steps: Vec<LearningStep>,
    pub fun_fact: Option<String>,
    pub reinforcement: Option<Box<QuestionDraft>>,
}

impl QuestionDraft {
    /// Validate the draft and its reinforcement question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id is blank, fewer than two options are given,
    /// the correct answer index is out of range, or the reinforcement question nests
    /// a further reinforcement question.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let reinforcement = match self.reinforcement {
            Some(nested) => {
                if nested.reinforcement.is_some() {
                    return Err(QuestionError::NestedReinforcement { id: nested.id });
                }
                Some(Box::new(nested.validate()?))
            }
            None => None,
        };

        if self.id.is_blank() {
            return Err(QuestionError::EmptyId);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id: self.id,
                found: self.options.len(),
            });
        }
        if self.correct_answer_index >= self.options.len() {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                id: self.id,
                index: self.correct_answer_index,
                options: self.options.len(),
            });
        }

        Ok(Question {
            id: self.id,
            category: self.category,
            prompt: self.prompt,
            options: self.options,
            correct_answer_index: self.correct_answer_index,
            explanation: self.explanation,
            concept: self.concept,
            tip: self.tip,
            difficulty: self.difficulty,
            steps: self.steps,
            fun_fact: self.fun_fact,
            reinforcement,
        })
    }
}

/// A validated multiple-choice question.
///
/// Immutable once built: `0 <= correct_answer_index < options.len()` and at
/// most one level of reinforcement always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    prompt: String,
    options: Vec<String>,
    correct_answer_index: usize,
    explanation: String,
    concept: String,
    tip: String,
    difficulty: Difficulty,
    steps: Vec<LearningStep>,
    fun_fact: Option<String>,
    reinforcement: Option<Box<Question>>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn steps(&self) -> &[LearningStep] {
        &self.steps
    }

    #[must_use]
    pub fn fun_fact(&self) -> Option<&str> {
        self.fun_fact.as_deref()
    }

    #[must_use]
    pub fn reinforcement(&self) -> Option<&Question> {
        self.reinforcement.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(id),
            category: Category::Logical,
            prompt: "Which?".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer_index: 2,
            explanation: String::new(),
            concept: String::new(),
            tip: String::new(),
            difficulty: Difficulty::Easy,
            steps: Vec::new(),
            fun_fact: None,
            reinforcement: None,
        }
    }

    #[test]
    fn valid_draft_builds_question() {
        let mut parent = draft("q1");
        parent.reinforcement = Some(Box::new(draft("q1r")));
        let question = parent.validate().unwrap();

        assert_eq!(question.id().as_str(), "q1");
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
        assert_eq!(question.reinforcement().unwrap().id().as_str(), "q1r");
    }

    #[test]
    fn rejects_blank_id() {
        let err = draft("  ").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyId);
    }

    #[test]
    fn rejects_single_option() {
        let mut d = draft("q1");
        d.options.truncate(1);
        d.correct_answer_index = 0;
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::TooFewOptions { found: 1, .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let mut d = draft("q1");
        d.correct_answer_index = 3;
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::CorrectAnswerOutOfRange { index: 3, options: 3, .. }
        ));
    }

    #[test]
    fn rejects_two_levels_of_reinforcement() {
        let mut inner = draft("q1r");
        inner.reinforcement = Some(Box::new(draft("q1rr")));
        let mut outer = draft("q1");
        outer.reinforcement = Some(Box::new(inner));

        assert_eq!(
            outer.validate().unwrap_err(),
            QuestionError::NestedReinforcement {
                id: QuestionId::new("q1r")
            }
        );
    }

    #[test]
    fn invalid_reinforcement_is_reported() {
        let mut inner = draft("q1r");
        inner.correct_answer_index = 9;
        let mut outer = draft("q1");
        outer.reinforcement = Some(Box::new(inner));

        assert!(matches!(
            outer.validate().unwrap_err(),
            QuestionError::CorrectAnswerOutOfRange { .. }
        ));
    }

    #[test]
    fn category_keys_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
        assert!("geography".parse::<Category>().is_err());
    }

    #[test]
    fn category_labels_match_display() {
        assert_eq!(Category::Logical.to_string(), "Logical Reasoning");
        assert_eq!(Category::Verbal.label(), "Verbal Ability");
    }
}
