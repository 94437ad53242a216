mod answer;
mod ids;
mod question;
mod result;
mod settings;

pub use answer::UserAnswer;
pub use ids::QuestionId;
pub use question::{Category, Difficulty, LearningStep, Question, QuestionDraft, QuestionError};
pub use result::{AssessmentResult, CategoryScore, round_percent};
pub use settings::{AssessmentSettings, LearningEfficiencyMode, SettingsError};
