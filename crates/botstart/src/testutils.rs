use std::{io::Write, sync::Arc};

use botstart_config::Config;
use botstart_core::{
    shutdown::{PendingShutdownService, ShutdownService},
    CoreModule,
};
use botstart_lock_interface::{LockInstance, LockService, LockStatus, MockLockService};
use botstart_runner_interface::{ActionRunner, MockActionRunner};
use clap::Parser;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub runner_service: Box<dyn ActionRunner + Send + Sync>,
    pub lock_service: Box<dyn LockService + Send + Sync>,
    pub shutdown_service: Box<dyn ShutdownService + Send + Sync>,
}

impl CommandContextTest {
    /// Context with a free instance lock and an unconfigured runner.
    pub fn new() -> Self {
        let mut lock_service = MockLockService::new();
        lock_service
            .expect_wait_lock_resource()
            .returning(|name, _| {
                Ok(LockStatus::SuccessfullyLocked(LockInstance::new_dummy(
                    name,
                )))
            });

        Self {
            config: Config::from_lookup("0.0.0".into(), &|_| None).unwrap(),
            core_module: CoreModule::builder().build(),
            runner_service: Box::new(MockActionRunner::new()),
            lock_service: Box::new(lock_service),
            shutdown_service: Box::new(PendingShutdownService),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            runner_service: self.runner_service,
            lock_service: self.lock_service,
            shutdown_service: self.shutdown_service,
            writer,
        }
    }
}

/// Run a command, returns its exit code and output.
pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> (i32, String) {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let code = {
        let command_args = {
            let mut tmp_args = vec!["botstart"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    let vec = buf.read().await.to_vec();
    (code, std::str::from_utf8(&vec).unwrap().to_string())
}
