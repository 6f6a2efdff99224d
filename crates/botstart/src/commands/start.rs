use async_trait::async_trait;
use botstart_core::pipeline::Pipeline;
use clap::Parser;

use super::{launch::launch_pipeline, Command, CommandContext};
use crate::Result;

/// Set up the database, then run the bot
#[derive(Parser)]
pub(crate) struct StartCommand;

#[async_trait]
impl Command for StartCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        launch_pipeline(&ctx, Pipeline::start()).await
    }
}

#[cfg(test)]
mod tests {
    use botstart_runner_interface::{ActionStatus, MockActionRunner};
    use mockall::Sequence;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn start_runs_setup_then_run() {
        let mut ctx = CommandContextTest::new();
        ctx.runner_service = {
            let mut runner = MockActionRunner::new();
            let mut seq = Sequence::new();
            runner
                .expect_run_action()
                .once()
                .in_sequence(&mut seq)
                .withf(|action| action == "setup-db")
                .return_once(|_| Ok(ActionStatus::Succeeded));
            runner
                .expect_run_action()
                .once()
                .in_sequence(&mut seq)
                .withf(|action| action == "run")
                .return_once(|_| Ok(ActionStatus::Succeeded));
            Box::new(runner)
        };

        let (code, output) = test_command(ctx, &["start"]).await;
        assert_eq!(code, 0);
        assert_eq!(output, "Pipeline `start` completed (2 actions).\n");
    }
}
