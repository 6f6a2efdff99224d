//! Pipeline outcomes.

use botstart_runner_interface::ActionStatus;

use crate::{pipeline::Action, shutdown::ShutdownSignal};

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Every action succeeded.
    Completed { pipeline: String, actions: usize },
    /// An action failed, the following ones were skipped.
    Failed {
        action: Action,
        /// 1-based position of the action in the pipeline.
        position: usize,
        status: ActionStatus,
    },
    /// A shutdown signal was received while running an action.
    Interrupted {
        action: Action,
        signal: ShutdownSignal,
    },
}

impl PipelineOutcome {
    /// Process exit code for this outcome.
    ///
    /// A failure propagates the action code, a graceful shutdown exits with 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed { .. } | Self::Interrupted { .. } => 0,
            Self::Failed { status, .. } => status.exit_code(),
        }
    }
}

impl std::fmt::Display for PipelineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed { pipeline, actions } => {
                write!(f, "Pipeline `{pipeline}` completed ({actions} actions).")
            }
            Self::Failed {
                action,
                position,
                status,
            } => write!(f, "Action `{action}` (step {position}) {status}."),
            Self::Interrupted { action, signal } => write!(
                f,
                "Received {signal} during action `{action}`, shut down gracefully."
            ),
        }
    }
}
