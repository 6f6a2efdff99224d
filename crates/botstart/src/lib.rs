//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use botstart_config::Config;
use botstart_core::DomainError;
use botstart_logging::configure_logging;
use botstart_runner_interface::RunnerError;
use clap::Parser;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

shadow!(build);

/// Get version data.
pub fn get_version_data() -> String {
    format!(
        "{} {} (commit {} - {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::COMMIT_HASH,
        build::COMMIT_DATE_3339
    )
}

/// Initialize command line, returns the process exit code.
pub fn initialize_command_line() -> Result<i32> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!("{}", get_version_data());

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}

/// Exit code for an error, following the shell conventions.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::RunnerError {
            source: RunnerError::ToolNotFound { .. },
        }) => 127,
        _ => 1,
    }
}
