use argh::FromArgs;

use crate::common::project_root;

/// launch a pipeline with the local build
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "launch")]
pub(crate) struct LaunchTask {
    /// pipeline command (`install`, `start`, ...)
    #[argh(positional, default = "String::from(\"start\")")]
    pipeline: String,

    /// only log targets
    #[argh(switch, short = 'd')]
    dry_run: bool,

    /// trace messages
    #[argh(switch, short = 't')]
    trace: bool,
}

impl LaunchTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["run", "--package", "botstart", "--"];
        if self.dry_run {
            args.push("--dry-run");
        }
        args.push(&self.pipeline);

        let mut expression = duct::cmd("cargo", args).dir(project_root());
        if self.trace {
            expression = expression.env("RUST_LOG", "info,botstart=trace");
        }

        expression.run()?;
        Ok(())
    }
}
