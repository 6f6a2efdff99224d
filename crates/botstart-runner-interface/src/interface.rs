//! Runner interfaces.

use async_trait::async_trait;

use crate::{ActionStatus, RunnerError};

/// Executes build tool targets.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ActionRunner: Send + Sync {
    /// Runs a target and waits for its completion.
    ///
    /// A target exiting with a non-zero status is not an error, it is
    /// reported through [`ActionStatus`].
    async fn run_action(&self, action: &str) -> Result<ActionStatus, RunnerError>;

    /// Forwards a shutdown signal to the running target and its processes.
    ///
    /// Returns `true` when a target was signalled: its `run_action` future
    /// should then be awaited until the target exits.
    async fn interrupt_action(&self, signal: i32) -> Result<bool, RunnerError>;
}
