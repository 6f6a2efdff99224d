use async_trait::async_trait;
use botstart_core::pipeline::Pipeline;
use clap::Parser;

use super::{Command, CommandContext};
use crate::Result;

/// List built-in pipelines
#[derive(Parser)]
pub(crate) struct PipelinesCommand;

#[async_trait]
impl Command for PipelinesCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        let mut writer = ctx.writer.write().await;
        for pipeline in Pipeline::presets() {
            writeln!(writer, "{}", pipeline)?;
        }

        Ok(0)
    }
}
