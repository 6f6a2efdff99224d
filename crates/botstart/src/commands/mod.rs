//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use botstart_config::Config;
use botstart_core::{shutdown::ShutdownService, CoreContext, CoreModule};
use botstart_lock_interface::LockService;
use botstart_runner_interface::ActionRunner;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{
    install::InstallCommand, pipelines::PipelinesCommand, start::StartCommand,
    targets::TargetsCommand, unlock::UnlockCommand,
};
use crate::Result;

mod install;
mod launch;
mod pipelines;
mod start;
mod targets;
mod unlock;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub runner_service: Box<dyn ActionRunner + Send + Sync>,
    pub lock_service: Box<dyn LockService + Send + Sync>,
    pub shutdown_service: Box<dyn ShutdownService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            runner_service: self.runner_service.as_ref(),
            lock_service: self.lock_service.as_ref(),
            shutdown_service: self.shutdown_service.as_ref(),
        }
    }
}

/// A command returns the process exit code.
#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<i32>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Install(InstallCommand),
    Start(StartCommand),
    Targets(TargetsCommand),
    Pipelines(PipelinesCommand),
    Unlock(UnlockCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<i32> {
        match self {
            Self::Install(sub) => sub.execute(ctx).await,
            Self::Start(sub) => sub.execute(ctx).await,
            Self::Targets(sub) => sub.execute(ctx).await,
            Self::Pipelines(sub) => sub.execute(ctx).await,
            Self::Unlock(sub) => sub.execute(ctx).await,
        }
    }
}
