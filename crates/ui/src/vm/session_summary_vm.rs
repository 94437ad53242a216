use aptitude_core::model::AssessmentResult;
use chrono::{DateTime, Utc};

use crate::vm::time_fmt::{format_datetime, format_duration};

/// Headline tier for the final accuracy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreMessage {
    pub text: &'static str,
    pub emoji: &'static str,
}

#[must_use]
pub fn score_message(accuracy_percent: u32) -> ScoreMessage {
    let (text, emoji) = match accuracy_percent {
        90.. => ("Outstanding!", "🌟"),
        75..=89 => ("Great Job!", "🎉"),
        60..=74 => ("Good Progress!", "👍"),
        40..=59 => ("Nice Effort!", "💪"),
        _ => ("Keep Practicing!", "📚"),
    };
    ScoreMessage { text, emoji }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRowVm {
    pub label: String,
    pub detail: String,
    pub percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummaryVm {
    pub message: ScoreMessage,
    pub score_label: String,
    pub accuracy_label: String,
    pub efficiency_label: String,
    pub time_label: String,
    pub completed_at_str: Option<String>,
    pub recovered_label: Option<String>,
    pub categories: Vec<CategoryRowVm>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl SessionSummaryVm {
    #[must_use]
    pub fn new(result: &AssessmentResult, completed_at: Option<DateTime<Utc>>) -> Self {
        let categories = result
            .category_scores()
            .iter()
            .map(|(category, score)| CategoryRowVm {
                label: category.label().to_string(),
                detail: format!("{}/{} ({}%)", score.correct, score.total, score.percentage),
                percentage: score.percentage,
            })
            .collect();

        let recovered_label = match result.recovered_questions() {
            0 => None,
            1 => Some("1 question recovered in learning mode".to_string()),
            n => Some(format!("{n} questions recovered in learning mode")),
        };

        Self {
            message: score_message(result.accuracy_percent()),
            score_label: format!("{}/{}", result.correct_answers(), result.total_questions()),
            accuracy_label: format!("{}%", result.accuracy_percent()),
            efficiency_label: format!("{}%", result.learning_efficiency()),
            time_label: format_duration(result.total_time_secs()),
            completed_at_str: completed_at.map(format_datetime),
            recovered_label,
            categories,
            strengths: result.strengths().to_vec(),
            improvements: result.improvements().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_message_tiers() {
        assert_eq!(score_message(100).text, "Outstanding!");
        assert_eq!(score_message(90).text, "Outstanding!");
        assert_eq!(score_message(89).text, "Great Job!");
        assert_eq!(score_message(75).text, "Great Job!");
        assert_eq!(score_message(60).text, "Good Progress!");
        assert_eq!(score_message(40).text, "Nice Effort!");
        assert_eq!(score_message(39).text, "Keep Practicing!");
        assert_eq!(score_message(0).emoji, "📚");
    }
}
