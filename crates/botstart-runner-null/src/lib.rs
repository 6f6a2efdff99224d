use async_trait::async_trait;
use botstart_runner_interface::{ActionRunner, ActionStatus, RunnerError};
use tracing::info;

/// Null runner, used for dry runs: targets are only logged.
#[derive(Clone, Default)]
pub struct NullActionRunner {
    _private: (),
}

impl NullActionRunner {
    /// Creates a null runner.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ActionRunner for NullActionRunner {
    #[tracing::instrument(skip(self), ret)]
    async fn run_action(&self, action: &str) -> Result<ActionStatus, RunnerError> {
        info!(action, "Dry run, skipping target");
        Ok(ActionStatus::Succeeded)
    }

    async fn interrupt_action(&self, _signal: i32) -> Result<bool, RunnerError> {
        Ok(false)
    }
}
