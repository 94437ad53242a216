mod controller;
mod phase;
mod progress;
mod scoring;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use phase::{Feedback, IgnoreReason, Phase, Transition};
pub use progress::SessionProgress;
pub use view::SessionSnapshot;
