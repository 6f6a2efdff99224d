/// Action completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// Exited with status 0.
    Succeeded,
    /// Exited with a non-zero status.
    Failed {
        /// Exit code.
        code: i32,
    },
    /// Killed by a signal, without exit code.
    Terminated {
        /// Signal number, when known.
        signal: Option<i32>,
    },
}

impl ActionStatus {
    /// Build a status from a raw exit code.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Self::Succeeded
        } else {
            Self::Failed { code }
        }
    }

    /// Is the action successful.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Exit code to propagate, using the shell convention for signals.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Failed { code } => *code,
            Self::Terminated { signal: Some(s) } => 128 + s,
            Self::Terminated { signal: None } => 1,
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed { code } => write!(f, "failed with exit code {code}"),
            Self::Terminated { signal: Some(s) } => write!(f, "terminated by signal {s}"),
            Self::Terminated { signal: None } => write!(f, "terminated"),
        }
    }
}
