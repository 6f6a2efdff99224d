//! Validation utilities.

use botstart_config::{Config, LockDriver, RunnerDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        error.push_str(&format!("  - Missing env. var.: {}", name));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        error.push_str(&format!("  - Invalid env. var.: {} ({})", name, reason));
    }

    let mut error = String::new();

    // The name is also the lock file name
    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    } else if config.name.contains(['/', '\\']) {
        _invalid(&mut error, "BOT_NAME", "path separators are not allowed");
    }

    // Check runner configuration
    if config.runner.driver == RunnerDriver::Make && config.runner.make.program.is_empty() {
        _missing(&mut error, "BOT_RUNNER_MAKE_PROGRAM");
    }

    // Check lock configuration
    if config.lock.driver == LockDriver::File && config.lock.file.directory.is_empty() {
        _missing(&mut error, "BOT_LOCK_FILE_DIRECTORY");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn default_config() -> Config {
        Config::from_lookup("0.0.0".into(), &|_| None).unwrap()
    }

    #[test]
    fn test_default_configuration_is_valid() {
        assert!(validate_configuration(&default_config()).is_ok());
    }

    #[test]
    fn test_missing_values_are_reported_together() {
        let mut config = default_config();
        config.name = "".into();
        config.runner.make.program = "".into();
        config.lock.file.directory = "".into();

        let ValidationError::EnvVarsError { errors } =
            validate_configuration(&config).unwrap_err();
        assert_eq!(
            errors,
            "\n  - Missing env. var.: BOT_NAME\
             \n  - Missing env. var.: BOT_RUNNER_MAKE_PROGRAM\
             \n  - Missing env. var.: BOT_LOCK_FILE_DIRECTORY"
        );
    }

    #[test]
    fn test_unused_drivers_are_not_checked() {
        let mut config = default_config();
        config.runner.driver = RunnerDriver::Null;
        config.runner.make.program = "".into();
        config.lock.driver = LockDriver::Null;
        config.lock.file.directory = "".into();

        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_name_with_path_separator() {
        let mut config = default_config();
        config.name = "../bot".into();

        assert!(matches!(
            validate_configuration(&config),
            Err(ValidationError::EnvVarsError { errors }) if errors.contains("BOT_NAME")
        ));
    }
}
