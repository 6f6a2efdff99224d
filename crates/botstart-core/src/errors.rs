//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`botstart_runner_interface::RunnerError`].
    #[error("Runner error: {source}")]
    RunnerError {
        source: botstart_runner_interface::RunnerError,
    },

    /// Wraps [`botstart_lock_interface::LockError`].
    #[error("Lock service error: {source}")]
    LockError {
        source: botstart_lock_interface::LockError,
    },

    #[error("Another instance of `{name}` is already running")]
    InstanceAlreadyRunning { name: String },

    #[error("Could not listen for shutdown signals: {source}")]
    SignalError { source: std::io::Error },
}

impl From<botstart_runner_interface::RunnerError> for DomainError {
    fn from(e: botstart_runner_interface::RunnerError) -> Self {
        Self::RunnerError { source: e }
    }
}

impl From<botstart_lock_interface::LockError> for DomainError {
    fn from(e: botstart_lock_interface::LockError) -> Self {
        Self::LockError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
