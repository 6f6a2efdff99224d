use argh::FromArgs;

use crate::common::project_root;

/// format all crates
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "fmt")]
pub(crate) struct FormatTask {
    /// error on changes
    #[argh(switch, short = 'e')]
    error: bool,
}

impl FormatTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["fmt", "--all"];
        if self.error {
            args.extend(["--", "--check"]);
        }

        duct::cmd("cargo", args).dir(project_root()).run()?;
        Ok(())
    }
}
