use rand::Rng;

use aptitude_core::model::{
    AssessmentResult, AssessmentSettings, LearningEfficiencyMode, UserAnswer,
};
use bank::QuestionBank;

/// Midpoint of the jitter range, used when the score must be reproducible.
const DETERMINISTIC_EFFICIENCY_OFFSET: f64 = 5.0;
const EFFICIENCY_JITTER_MAX: f64 = 10.0;

fn efficiency_offset(mode: LearningEfficiencyMode) -> f64 {
    match mode {
        LearningEfficiencyMode::Deterministic => DETERMINISTIC_EFFICIENCY_OFFSET,
        LearningEfficiencyMode::Jittered => rand::rng().random_range(0.0..EFFICIENCY_JITTER_MAX),
    }
}

/// Aggregate the answer log once the last question has been continued past.
pub(crate) fn score(
    bank: &QuestionBank,
    answers: &[UserAnswer],
    total_time_secs: u32,
    settings: &AssessmentSettings,
) -> AssessmentResult {
    AssessmentResult::from_answers(
        bank.questions(),
        answers,
        total_time_secs,
        settings,
        efficiency_offset(settings.efficiency()),
    )
}
