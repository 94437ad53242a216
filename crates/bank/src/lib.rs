#![forbid(unsafe_code)]

//! The question bank: a validated, read-only, ordered list of questions.

pub mod error;
pub mod record;
mod repository;

pub use error::BankError;
pub use record::{LearningStepRecord, QuestionRecord};
pub use repository::QuestionBank;
