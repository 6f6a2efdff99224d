use async_trait::async_trait;
use botstart_lock_interface::LockStatus;
use shaku::{Component, HasComponent, Interface};
use tracing::{error, info};

use super::run_pipeline::RunPipelineInterface;
use crate::{outcome::PipelineOutcome, pipeline::Pipeline, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait LaunchPipelineInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pipeline: &Pipeline)
        -> Result<PipelineOutcome>;
}

/// Runs a pipeline while holding the instance lock.
#[derive(Component)]
#[shaku(interface = LaunchPipelineInterface)]
pub(crate) struct LaunchPipeline;

#[async_trait]
impl LaunchPipelineInterface for LaunchPipeline {
    #[tracing::instrument(skip(self, ctx), fields(pipeline = %pipeline.name(), name = %ctx.config.name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pipeline: &Pipeline,
    ) -> Result<PipelineOutcome> {
        let name = &ctx.config.name;
        let instance = match ctx
            .lock_service
            .wait_lock_resource(name, ctx.config.lock.wait_timeout_ms)
            .await?
        {
            LockStatus::SuccessfullyLocked(instance) => instance,
            LockStatus::AlreadyLocked => {
                error!("Another instance is already running, exiting");
                return Err(DomainError::InstanceAlreadyRunning { name: name.clone() });
            }
        };

        info!(lock = instance.name(), "Instance lock acquired");

        let run_uc: &dyn RunPipelineInterface = ctx.core_module.resolve_ref();
        let result = run_uc.run(ctx, pipeline).await;

        // Released on every path, including errors and interruptions.
        let released = instance.release().await;
        let outcome = result?;
        released?;

        info!(exit_code = outcome.exit_code(), "Instance lock released");
        Ok(outcome)
    }
}
