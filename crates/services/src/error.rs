//! Shared error types for the services crate.

use thiserror::Error;

use bank::BankError;

/// Errors emitted while setting up an assessment session.
///
/// Intents on a running session never fail; they report
/// [`crate::Transition::Ignored`] instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Bank(#[from] BankError),
}
