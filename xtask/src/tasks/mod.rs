use argh::FromArgs;

use self::{format::FormatTask, launch::LaunchTask, lint::LintTask, test::TestTask};

mod format;
mod launch;
mod lint;

/// Tasks
#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub(crate) enum Tasks {
    Format(FormatTask),
    Lint(LintTask),
    Test(TestTask),
    Launch(LaunchTask),
}
