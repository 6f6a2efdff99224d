use async_trait::async_trait;
use botstart_core::pipeline::Pipeline;
use clap::Parser;

use super::{launch::launch_pipeline, Command, CommandContext};
use crate::Result;

/// Install dependencies, set up the database, then run the bot
#[derive(Parser)]
pub(crate) struct InstallCommand;

#[async_trait]
impl Command for InstallCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        launch_pipeline(&ctx, Pipeline::install()).await
    }
}

#[cfg(test)]
mod tests {
    use botstart_runner_interface::{ActionStatus, MockActionRunner};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn install_stops_at_first_failure() {
        let mut ctx = CommandContextTest::new();
        ctx.runner_service = {
            let mut runner = MockActionRunner::new();
            runner
                .expect_run_action()
                .once()
                .withf(|action| action == "install")
                .return_once(|_| Ok(ActionStatus::Failed { code: 2 }));
            runner
                .expect_run_action()
                .never()
                .withf(|action| action == "setup-db" || action == "run");
            Box::new(runner)
        };

        let (code, output) = test_command(ctx, &["install"]).await;
        assert_eq!(code, 2);
        assert_eq!(output, "Action `install` (step 1) failed with exit code 2.\n");
    }

    #[tokio::test]
    async fn install_completes() {
        let mut ctx = CommandContextTest::new();
        ctx.runner_service = {
            let mut runner = MockActionRunner::new();
            runner
                .expect_run_action()
                .times(3)
                .returning(|_| Ok(ActionStatus::Succeeded));
            Box::new(runner)
        };

        let (code, output) = test_command(ctx, &["install"]).await;
        assert_eq!(code, 0);
        assert_eq!(output, "Pipeline `install` completed (3 actions).\n");
    }
}
