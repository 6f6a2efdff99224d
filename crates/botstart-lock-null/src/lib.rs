use std::time::Duration;

use async_trait::async_trait;
use botstart_lock_interface::{LockError, LockInstance, LockService, LockStatus};

/// Null lock service, every lock attempt succeeds.
#[derive(Clone, Default)]
pub struct NullLockService {
    _private: (),
}

impl NullLockService {
    /// Creates a null lock service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl LockService for NullLockService {
    #[tracing::instrument(skip(self), ret)]
    async fn try_lock_resource<'a>(&'a self, name: &str) -> Result<LockStatus<'a>, LockError> {
        Ok(LockStatus::SuccessfullyLocked(LockInstance::new(
            self, name,
        )))
    }

    #[tracing::instrument(skip(self), ret)]
    async fn has_resource(&self, _name: &str) -> Result<bool, LockError> {
        Ok(false)
    }

    #[tracing::instrument(skip(self))]
    async fn del_resource(&self, _name: &str) -> Result<(), LockError> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn sleep_for_duration(&self, duration: Duration) -> Result<(), LockError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_locks() -> Result<(), LockError> {
        let svc = NullLockService::new();

        let first = svc.try_lock_resource("bot").await?;
        let second = svc.try_lock_resource("bot").await?;
        assert!(matches!(first, LockStatus::SuccessfullyLocked(_)));
        assert!(matches!(second, LockStatus::SuccessfullyLocked(_)));
        assert!(!svc.has_resource("bot").await?);

        Ok(())
    }
}
