use async_trait::async_trait;
use botstart_core::use_cases::unlock_instance::UnlockInstanceInterface;
use clap::Parser;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Remove a stale instance lock
#[derive(Parser)]
pub(crate) struct UnlockCommand;

#[async_trait]
impl Command for UnlockCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        let uc: &dyn UnlockInstanceInterface = ctx.core_module.resolve_ref();
        let removed = uc.run(&ctx.as_core_context()).await?;

        if removed {
            writeln!(
                ctx.writer.write().await,
                "Instance lock `{}` removed.",
                ctx.config.name
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "No instance lock for `{}`.",
                ctx.config.name
            )?;
        }

        Ok(0)
    }
}
