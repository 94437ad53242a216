#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use aptitude_core::Clock;
pub use sessions as session;

pub use error::SessionError;
pub use sessions::{
    Feedback, IgnoreReason, Phase, SessionController, SessionProgress, SessionSnapshot,
    Transition,
};
