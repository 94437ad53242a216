use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Coarse stage of an assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Welcome,
    Instructions,
    Assessment,
    Summary,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Welcome => "welcome",
            Phase::Instructions => "instructions",
            Phase::Assessment => "assessment",
            Phase::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Whether the active question has been checked, and how it went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn is_shown(self) -> bool {
        !matches!(self, Feedback::None)
    }
}

/// Why an intent left the session untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IgnoreReason {
    #[error("intent requires the {expected} phase, session is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("answer already checked")]
    AlreadyChecked,

    #[error("option {index} is out of range for {options} options")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("no option selected")]
    NothingSelected,

    #[error("answer not checked yet")]
    NotChecked,

    #[error("reinforcement is only offered after an incorrect answer")]
    NotIncorrect,

    #[error("question has no reinforcement question")]
    NoReinforcement,

    #[error("reinforcement question already active")]
    ReinforcementActive,

    #[error("clock cannot move backwards from {current}s to {requested}s")]
    ClockBackwards { current: u32, requested: u32 },
}

/// Outcome of forwarding an intent to the session.
///
/// `Ignored` intents never change state; they come from controls the
/// presentation layer should have disabled.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }

    #[must_use]
    pub fn ignored_reason(self) -> Option<IgnoreReason> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(reason) => Some(reason),
        }
    }
}
