//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DriverError, LockDriver, RunnerDriver};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Wrong value for {name}: {source}")]
    DriverError { name: String, source: DriverError },
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Runner driver.
    pub driver: RunnerDriver,
    /// Make options.
    pub make: RunnerMakeConfig,
}

#[derive(Debug, Clone)]
pub struct RunnerMakeConfig {
    /// Build tool program, resolved from `PATH` when not absolute.
    pub program: String,
    /// Optional makefile path, passed with `-f`.
    pub makefile: String,
    /// Optional working directory for the build tool.
    pub working_directory: String,
}

#[derive(Debug, Clone)]
pub struct LockConfig {
    /// Lock driver.
    pub driver: LockDriver,
    /// Lock file options.
    pub file: LockFileConfig,
    /// How long to wait for the instance lock (in milliseconds)
    pub wait_timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct LockFileConfig {
    /// Directory holding lock files.
    pub directory: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Launcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Instance name.
    pub name: String,
    /// Runner options.
    pub runner: RunnerConfig,
    /// Lock options.
    pub lock: LockConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Self::from_lookup(version, &|name| env::var(name).ok())
    }

    /// Create configuration from a variable lookup function.
    pub fn from_lookup(
        version: String,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Config, ConfigError> {
        let vars = EnvVars(lookup);

        Ok(Config {
            name: vars.to_str("BOT_NAME", "bot"),
            runner: RunnerConfig {
                driver: vars.to_driver("BOT_RUNNER_DRIVER", "make")?,
                make: RunnerMakeConfig {
                    program: vars.to_str("BOT_RUNNER_MAKE_PROGRAM", "make"),
                    makefile: vars.to_str("BOT_RUNNER_MAKE_MAKEFILE", ""),
                    working_directory: vars.to_str("BOT_RUNNER_MAKE_WORKING_DIRECTORY", ""),
                },
            },
            lock: LockConfig {
                driver: vars.to_driver("BOT_LOCK_DRIVER", "file")?,
                file: LockFileConfig {
                    directory: vars.to_str("BOT_LOCK_FILE_DIRECTORY", "/tmp"),
                },
                wait_timeout_ms: vars.to_u64("BOT_LOCK_WAIT_TIMEOUT_MS", 0),
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }
}

struct EnvVars<'a>(&'a dyn Fn(&str) -> Option<String>);

impl EnvVars<'_> {
    fn to_u64(&self, name: &str, default: u64) -> u64 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        (self.0)(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        (self.0)(name).unwrap_or_else(|| default.to_string())
    }

    fn to_driver<T>(&self, name: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr<Err = DriverError>,
    {
        T::from_str(&self.to_str(name, default)).map_err(|e| ConfigError::DriverError {
            name: name.into(),
            source: e,
        })
    }
}
