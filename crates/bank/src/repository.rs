use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use aptitude_core::model::{Category, Question};

use crate::error::BankError;
use crate::record::QuestionRecord;

const BUILTIN_BANK: &str = include_str!("../data/default_bank.json");

/// Immutable, ordered question bank.
///
/// Cloning is cheap: the questions live behind an `Arc` and are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Build a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and `BankError::DuplicateId`
    /// when two questions (reinforcement questions included) share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            let ids = std::iter::once(question.id())
                .chain(question.reinforcement().map(Question::id));
            for id in ids {
                if !seen.insert(id) {
                    return Err(BankError::DuplicateId(id.clone()));
                }
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Validate records and build a bank from them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` with the 1-based position of the first
    /// invalid record, or any error from [`QuestionBank::new`].
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, BankError> {
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_draft()
                    .validate()
                    .map_err(|source| BankError::InvalidQuestion {
                        position: index + 1,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Parse a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Serialization` for malformed JSON, otherwise see
    /// [`QuestionBank::from_records`].
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// Load a JSON bank file.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, otherwise see
    /// [`QuestionBank::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// The eight-question bank shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data file is broken.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json_str(BUILTIN_BANK)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of primary questions per category. Categories with none are absent.
    #[must_use]
    pub fn category_totals(&self) -> BTreeMap<Category, usize> {
        let mut totals = BTreeMap::new();
        for question in self.iter() {
            *totals.entry(question.category()).or_insert(0) += 1;
        }
        totals
    }
}
