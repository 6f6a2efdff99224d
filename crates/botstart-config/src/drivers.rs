use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerDriver {
    Null,
    Make,
}

impl FromStr for RunnerDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "make" => Ok(Self::Make),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockDriver {
    Null,
    File,
}

impl FromStr for LockDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "file" => Ok(Self::File),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_drivers_case_insensitive() {
        assert_eq!(RunnerDriver::from_str("MAKE"), Ok(RunnerDriver::Make));
        assert_eq!(RunnerDriver::from_str("null"), Ok(RunnerDriver::Null));
        assert_eq!(LockDriver::from_str("File"), Ok(LockDriver::File));
        assert_eq!(LockDriver::from_str("null"), Ok(LockDriver::Null));
    }

    #[test]
    fn parse_unknown_driver() {
        assert_eq!(
            LockDriver::from_str("redis"),
            Err(DriverError::InvalidDriverKind {
                kind: "redis".into()
            })
        );
        assert!(RunnerDriver::from_str("").is_err());
    }
}
