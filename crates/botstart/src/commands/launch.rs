use botstart_core::{pipeline::Pipeline, use_cases::launch_pipeline::LaunchPipelineInterface};
use shaku::HasComponent;

use super::CommandContext;
use crate::Result;

/// Launch a pipeline and report its outcome.
pub(crate) async fn launch_pipeline(ctx: &CommandContext, pipeline: Pipeline) -> Result<i32> {
    let uc: &dyn LaunchPipelineInterface = ctx.core_module.resolve_ref();
    let outcome = uc.run(&ctx.as_core_context(), &pipeline).await?;

    writeln!(ctx.writer.write().await, "{}", outcome)?;
    Ok(outcome.exit_code())
}
