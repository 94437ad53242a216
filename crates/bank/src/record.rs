use aptitude_core::model::{Category, Difficulty, LearningStep, QuestionDraft, QuestionId};
use serde::{Deserialize, Serialize};

/// On-disk shape of a learning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStepRecord {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub emoji: String,
}

/// On-disk shape of a question in a bank file.
///
/// Mirrors the domain `Question` so the bank format stays out of the domain
/// layer. Keys are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: String,
    pub category: Category,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub tip: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<LearningStepRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reinforcement_question: Option<Box<QuestionRecord>>,
}

impl QuestionRecord {
    /// Convert the record into an unvalidated domain draft.
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(self.id),
            category: self.category,
            prompt: self.question,
            options: self.options,
            correct_answer_index: self.correct_answer,
            explanation: self.explanation,
            concept: self.concept,
            tip: self.tip,
            difficulty: self.difficulty,
            steps: self
                .steps
                .into_iter()
                .map(|step| LearningStep {
                    title: step.title,
                    content: step.content,
                    emoji: step.emoji,
                })
                .collect(),
            fun_fact: self.fun_fact,
            reinforcement: self
                .reinforcement_question
                .map(|nested| Box::new(nested.into_draft())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_record_with_reinforcement() {
        let raw = r#"{
            "id": "q1",
            "category": "quantitative",
            "question": "2 + 2?",
            "options": ["3", "4"],
            "correctAnswer": 1,
            "difficulty": "easy",
            "steps": [{ "title": "Add", "content": "2 + 2 = 4" }],
            "reinforcementQuestion": {
                "id": "q1r",
                "category": "quantitative",
                "question": "3 + 3?",
                "options": ["6", "7"],
                "correctAnswer": 0,
                "difficulty": "easy"
            }
        }"#;

        let record: QuestionRecord = serde_json::from_str(raw).unwrap();
        let draft = record.into_draft();

        assert_eq!(draft.id.as_str(), "q1");
        assert_eq!(draft.correct_answer_index, 1);
        assert_eq!(draft.steps[0].emoji, "");
        assert_eq!(draft.reinforcement.unwrap().id.as_str(), "q1r");
    }

    #[test]
    fn rejects_unknown_category() {
        let raw = r#"{
            "id": "q1", "category": "geography", "question": "?",
            "options": ["a", "b"], "correctAnswer": 0, "difficulty": "easy"
        }"#;
        assert!(serde_json::from_str::<QuestionRecord>(raw).is_err());
    }
}
