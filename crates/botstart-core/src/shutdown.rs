//! Shutdown signals.

use async_trait::async_trait;

use crate::{DomainError, Result};

/// Signal requesting a graceful shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl-C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl ShutdownSignal {
    /// POSIX signal number, forwarded to the running target.
    pub fn number(&self) -> i32 {
        match self {
            Self::Interrupt => 2,
            Self::Terminate => 15,
        }
    }
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrupt => write!(f, "SIGINT"),
            Self::Terminate => write!(f, "SIGTERM"),
        }
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ShutdownService: Send + Sync {
    /// Resolves when a shutdown signal is received.
    async fn wait_for_signal(&self) -> Result<ShutdownSignal>;
}

/// Never receives any signal.
#[cfg(any(test, feature = "testkit"))]
pub struct PendingShutdownService;

#[cfg(any(test, feature = "testkit"))]
#[async_trait]
impl ShutdownService for PendingShutdownService {
    async fn wait_for_signal(&self) -> Result<ShutdownSignal> {
        std::future::pending().await
    }
}

/// Listens to process signals.
#[derive(Clone, Default)]
pub struct OsShutdownService {
    _private: (),
}

impl OsShutdownService {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ShutdownService for OsShutdownService {
    #[cfg(unix)]
    async fn wait_for_signal(&self) -> Result<ShutdownSignal> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())
            .map_err(|e| DomainError::SignalError { source: e })?;
        let mut terminate = signal(SignalKind::terminate())
            .map_err(|e| DomainError::SignalError { source: e })?;

        tokio::select! {
            _ = interrupt.recv() => Ok(ShutdownSignal::Interrupt),
            _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
        }
    }

    #[cfg(not(unix))]
    async fn wait_for_signal(&self) -> Result<ShutdownSignal> {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| DomainError::SignalError { source: e })?;

        Ok(ShutdownSignal::Interrupt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn signal_numbers() {
        assert_eq!(ShutdownSignal::Interrupt.number(), 2);
        assert_eq!(ShutdownSignal::Terminate.number(), 15);
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
    }
}
