mod learning_vm;
mod progress_vm;
mod screen;
mod session_summary_vm;
mod session_vm;
mod time_fmt;

pub use learning_vm::LearningWalkthrough;
pub use progress_vm::{ProgressSlot, ProgressVm, map_progress};
pub use screen::{FeedbackPanel, OptionState, OptionVm, QuestionScreen, Screen, describe};
pub use session_summary_vm::{CategoryRowVm, ScoreMessage, SessionSummaryVm, score_message};
pub use session_vm::{SessionIntent, SessionVm, dispatch};
pub use time_fmt::{format_clock, format_datetime, format_duration};
