use std::sync::Arc;

use botstart_config::{Config, LockDriver, RunnerDriver};
use botstart_core::{shutdown::OsShutdownService, CoreModule};
use botstart_lock_file::FileLockService;
use botstart_lock_interface::LockService;
use botstart_lock_null::NullLockService;
use botstart_runner_interface::ActionRunner;
use botstart_runner_make::MakeActionRunner;
use botstart_runner_null::NullActionRunner;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(version, about = "Launch the bot through its build tool targets", long_about = None)]
pub struct Args {
    /// Log targets instead of running them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<i32> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            let ctx = Self::build_context(config, args.dry_run);
            Self::parse_args_async(args, ctx).await
        })
    }

    fn build_context(config: Config, dry_run: bool) -> CommandContext {
        let runner_service: Box<dyn ActionRunner + Send + Sync + 'static> = {
            if dry_run || config.runner.driver == RunnerDriver::Null {
                info!("Using NullActionRunner runner driver");
                Box::new(NullActionRunner::new())
            } else {
                info!("Using MakeActionRunner runner driver");
                Box::new(MakeActionRunner::from_config(&config))
            }
        };

        let lock_service: Box<dyn LockService + Send + Sync + 'static> = {
            if config.lock.driver == LockDriver::File {
                info!("Using FileLockService lock driver");
                Box::new(FileLockService::new(&config.lock.file.directory))
            } else {
                info!("Using NullLockService lock driver");
                Box::new(NullLockService::new())
            }
        };

        CommandContext {
            config,
            core_module: CoreModule::builder().build(),
            runner_service,
            lock_service,
            shutdown_service: Box::new(OsShutdownService::new()),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        }
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<i32> {
        args.cmd.execute(ctx).await
    }
}
