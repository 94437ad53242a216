use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::model::answer::UserAnswer;
use crate::model::ids::QuestionId;
use crate::model::question::{Category, Question};
use crate::model::settings::AssessmentSettings;

/// Shown when no category reaches the strength threshold.
pub const DEFAULT_STRENGTH: &str = "Completing the assessment";
/// Shown when no category falls below the improvement threshold.
pub const DEFAULT_IMPROVEMENT: &str = "Keep practicing all areas";

/// `round(100 * part / whole)` with halves rounded up. Returns 0 when `whole` is 0.
#[must_use]
pub fn round_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Score for one category over the primary bank questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Aggregate outcome of a finished assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    total_questions: u32,
    correct_answers: u32,
    accuracy_percent: u32,
    learning_efficiency: u32,
    total_time_secs: u32,
    category_scores: BTreeMap<Category, CategoryScore>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    recovered_questions: u32,
    reinforcement_attempts: u32,
}

impl AssessmentResult {
    /// Aggregate a finished answer log against the bank it was answered from.
    ///
    /// Only primary (non-reinforcement) answers count toward `correct_answers`
    /// and category scores. `efficiency_offset` is added to `0.9 * accuracy`
    /// before rounding; callers pick it according to the configured mode.
    ///
    /// The result depends only on its inputs, so replaying the same answers
    /// yields an equal result.
    #[must_use]
    pub fn from_answers(
        bank: &[Question],
        answers: &[UserAnswer],
        total_time_secs: u32,
        settings: &AssessmentSettings,
        efficiency_offset: f64,
    ) -> Self {
        let total_questions = u32::try_from(bank.len()).unwrap_or(u32::MAX);

        let primary_correct: HashMap<&QuestionId, bool> = answers
            .iter()
            .filter(|answer| !answer.is_reinforcement())
            .map(|answer| (answer.question_id(), answer.is_correct()))
            .collect();

        let correct_answers =
            count(answers.iter().filter(|a| !a.is_reinforcement() && a.is_correct()));
        let accuracy_percent = round_percent(correct_answers, total_questions);

        let mut category_scores = BTreeMap::new();
        for category in Category::ALL {
            let in_category = bank.iter().filter(|q| q.category() == category);
            let total = count(in_category.clone());
            if total == 0 {
                continue;
            }
            let correct = count(in_category.filter(|q| {
                primary_correct.get(q.id()).copied().unwrap_or(false)
            }));
            category_scores.insert(
                category,
                CategoryScore {
                    correct,
                    total,
                    percentage: round_percent(correct, total),
                },
            );
        }

        let mut strengths = Vec::new();
        let mut improvements = Vec::new();
        for (category, score) in &category_scores {
            if score.percentage >= settings.strength_threshold() {
                strengths.push(category.label().to_owned());
            } else if score.percentage < settings.improvement_threshold() {
                improvements.push(category.label().to_owned());
            }
        }
        if strengths.is_empty() {
            strengths.push(DEFAULT_STRENGTH.to_owned());
        }
        if improvements.is_empty() {
            improvements.push(DEFAULT_IMPROVEMENT.to_owned());
        }

        let recovered_questions = count(bank.iter().filter(|question| {
            let missed = primary_correct.get(question.id()) == Some(&false);
            missed
                && question.reinforcement().is_some_and(|reinforcement| {
                    answers.iter().any(|a| {
                        a.is_reinforcement()
                            && a.is_correct()
                            && a.question_id() == reinforcement.id()
                    })
                })
        }));

        Self {
            total_questions,
            correct_answers,
            accuracy_percent,
            learning_efficiency: learning_efficiency(accuracy_percent, efficiency_offset),
            total_time_secs,
            category_scores,
            strengths,
            improvements,
            recovered_questions,
            reinforcement_attempts: count(answers.iter().filter(|a| a.is_reinforcement())),
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn learning_efficiency(&self) -> u32 {
        self.learning_efficiency
    }

    #[must_use]
    pub fn total_time_secs(&self) -> u32 {
        self.total_time_secs
    }

    #[must_use]
    pub fn category_scores(&self) -> &BTreeMap<Category, CategoryScore> {
        &self.category_scores
    }

    #[must_use]
    pub fn category_score(&self, category: Category) -> Option<&CategoryScore> {
        self.category_scores.get(&category)
    }

    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    #[must_use]
    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    /// Primary misses later answered correctly on their reinforcement question.
    #[must_use]
    pub fn recovered_questions(&self) -> u32 {
        self.recovered_questions
    }

    #[must_use]
    pub fn reinforcement_attempts(&self) -> u32 {
        self.reinforcement_attempts
    }
}

fn count<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn learning_efficiency(accuracy_percent: u32, offset: f64) -> u32 {
    let raw = (f64::from(accuracy_percent) * 0.9 + offset.max(0.0) + 0.5).floor();
    (raw as u32).min(100)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
