#![forbid(unsafe_code)]

//! Toolkit-agnostic view models for the assessment screens.

pub mod vm;

pub use vm::{Screen, SessionIntent, SessionVm};
