use chrono::{DateTime, Utc};

use aptitude_core::model::{AssessmentResult, Question};

use super::phase::{Feedback, Phase};
use super::progress::SessionProgress;

/// Read-only snapshot of a session for the presentation layer.
///
/// `active_question` is only set during the assessment phase; `result` and
/// `completed_at` only in the summary phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot<'a> {
    pub phase: Phase,
    pub active_question: Option<&'a Question>,
    pub selected_option: Option<usize>,
    pub feedback: Feedback,
    pub progress: SessionProgress,
    pub elapsed_secs: u32,
    pub is_reinforcement_active: bool,
    pub can_try_reinforcement: bool,
    pub result: Option<&'a AssessmentResult>,
    pub completed_at: Option<DateTime<Utc>>,
}
