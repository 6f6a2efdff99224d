use async_trait::async_trait;
use botstart_core::pipeline::{Action, Pipeline};
use clap::Parser;

use super::{launch::launch_pipeline, Command, CommandContext};
use crate::Result;

/// Run custom targets, in order
#[derive(Parser)]
pub(crate) struct TargetsCommand {
    /// Build tool targets (e.g. `setup-db run`)
    #[arg(required = true)]
    targets: Vec<Action>,
}

#[async_trait]
impl Command for TargetsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        launch_pipeline(&ctx, Pipeline::new("targets", self.targets)).await
    }
}

#[cfg(test)]
mod tests {
    use botstart_runner_interface::{ActionStatus, MockActionRunner};
    use mockall::Sequence;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn custom_targets_keep_order() {
        let mut ctx = CommandContextTest::new();
        ctx.runner_service = {
            let mut runner = MockActionRunner::new();
            let mut seq = Sequence::new();
            for (name, status) in [
                ("lint", ActionStatus::Succeeded),
                ("migrate", ActionStatus::Terminated { signal: Some(15) }),
            ] {
                runner
                    .expect_run_action()
                    .once()
                    .in_sequence(&mut seq)
                    .withf(move |action| action == name)
                    .return_once(move |_| Ok(status));
            }
            runner
                .expect_run_action()
                .never()
                .withf(|action| action == "run");
            Box::new(runner)
        };

        let (code, output) = test_command(ctx, &["targets", "lint", "migrate", "run"]).await;
        assert_eq!(code, 143);
        assert_eq!(
            output,
            "Action `migrate` (step 2) terminated by signal 15.\n"
        );
    }
}
