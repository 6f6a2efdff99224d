use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::{info, warn};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UnlockInstanceInterface: Interface {
    /// Returns `true` when a lock was removed.
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<bool>;
}

/// Removes a stale instance lock.
#[derive(Component)]
#[shaku(interface = UnlockInstanceInterface)]
pub(crate) struct UnlockInstance;

#[async_trait]
impl UnlockInstanceInterface for UnlockInstance {
    #[tracing::instrument(skip(self, ctx), fields(name = %ctx.config.name), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<bool> {
        let name = &ctx.config.name;
        if !ctx.lock_service.has_resource(name).await? {
            info!("No instance lock to remove");
            return Ok(false);
        }

        warn!("Removing instance lock");
        ctx.lock_service.del_resource(name).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use botstart_lock_interface::MockLockService;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn removes_existing_lock() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.lock_service = {
            let mut svc = MockLockService::new();
            svc.expect_has_resource()
                .once()
                .withf(|name| name == "bot")
                .return_once(|_| Ok(true));
            svc.expect_del_resource()
                .once()
                .withf(|name| name == "bot")
                .return_once(|_| Ok(()));
            Box::new(svc)
        };

        assert!(UnlockInstance.run(&ctx.as_context()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn nothing_to_remove() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.lock_service = {
            let mut svc = MockLockService::new();
            svc.expect_has_resource()
                .once()
                .return_once(|_| Ok(false));
            svc.expect_del_resource().never();
            Box::new(svc)
        };

        assert!(!UnlockInstance.run(&ctx.as_context()).await?);

        Ok(())
    }
}
