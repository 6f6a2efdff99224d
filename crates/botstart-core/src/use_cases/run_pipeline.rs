use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::{error, info, warn};

use crate::{outcome::PipelineOutcome, pipeline::Pipeline, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunPipelineInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pipeline: &Pipeline)
        -> Result<PipelineOutcome>;
}

/// Runs actions one after the other, stopping at the first failure.
#[derive(Component)]
#[shaku(interface = RunPipelineInterface)]
pub(crate) struct RunPipeline;

#[async_trait]
impl RunPipelineInterface for RunPipeline {
    #[tracing::instrument(skip(self, ctx), fields(pipeline = %pipeline.name()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pipeline: &Pipeline,
    ) -> Result<PipelineOutcome> {
        // Listen once for the whole run, signals between actions are not lost.
        let mut shutdown = ctx.shutdown_service.wait_for_signal();

        for (index, action) in pipeline.actions().iter().enumerate() {
            info!(action = %action, step = index + 1, total = pipeline.len(), "Running action");

            let mut run = ctx.runner_service.run_action(action.name());
            let status = tokio::select! {
                biased;

                signal = &mut shutdown => {
                    let signal = signal?;
                    warn!(%signal, action = %action, "Received signal, shutting down gracefully");

                    // The action must be gone before the instance lock is released.
                    if ctx.runner_service.interrupt_action(signal.number()).await? {
                        match run.await {
                            Ok(status) => info!(%status, "Interrupted action exited"),
                            Err(e) => warn!(error = %e, "Could not await interrupted action"),
                        }
                    }

                    return Ok(PipelineOutcome::Interrupted {
                        action: action.clone(),
                        signal,
                    });
                }
                status = &mut run => status?,
            };

            if !status.is_success() {
                error!(action = %action, %status, "Action failed, aborting pipeline");
                return Ok(PipelineOutcome::Failed {
                    action: action.clone(),
                    position: index + 1,
                    status,
                });
            }
        }

        Ok(PipelineOutcome::Completed {
            pipeline: pipeline.name().into(),
            actions: pipeline.len(),
        })
    }
}
