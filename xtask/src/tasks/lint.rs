use argh::FromArgs;

use crate::common::project_root;

/// lint all crates
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "lint")]
pub(crate) struct LintTask {
    /// error on warnings
    #[argh(switch, short = 'e')]
    error: bool,
}

impl LintTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["clippy", "--workspace", "--all-features", "--tests"];
        if self.error {
            args.extend(["--", "-D", "warnings"]);
        }

        duct::cmd("cargo", args).dir(project_root()).run()?;
        Ok(())
    }
}
