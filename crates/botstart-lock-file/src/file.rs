use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use botstart_lock_interface::{LockError, LockInstance, LockService, LockStatus};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

const LOCK_CONTENT: &[u8] = b"locked";

/// File lock service.
///
/// Each resource is a `<name>.lock` file in the lock directory.
/// A resource is locked as long as its file exists.
#[derive(Clone, Debug)]
pub struct FileLockService {
    directory: PathBuf,
}

impl FileLockService {
    /// Creates a new file lock service.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Path of the lock file for a resource.
    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.lock"))
    }

    fn storage_error(&self, path: &Path, e: std::io::Error) -> LockError {
        LockError::StorageUnavailable {
            location: path.display().to_string(),
            source: e,
        }
    }
}

#[async_trait]
impl LockService for FileLockService {
    #[tracing::instrument(skip(self), ret)]
    async fn try_lock_resource<'a>(&'a self, name: &str) -> Result<LockStatus<'a>, LockError> {
        let path = self.resource_path(name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match file {
            Ok(mut file) => {
                file.write_all(LOCK_CONTENT)
                    .await
                    .map_err(|e| self.storage_error(&path, e))?;
                file.flush()
                    .await
                    .map_err(|e| self.storage_error(&path, e))?;

                Ok(LockStatus::SuccessfullyLocked(LockInstance::new(self, name)))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(LockStatus::AlreadyLocked),
            Err(e) => Err(self.storage_error(&path, e)),
        }
    }

    #[tracing::instrument(skip(self), ret)]
    async fn has_resource(&self, name: &str) -> Result<bool, LockError> {
        let path = self.resource_path(name);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| self.storage_error(&path, e))
    }

    #[tracing::instrument(skip(self))]
    async fn del_resource(&self, name: &str) -> Result<(), LockError> {
        let path = self.resource_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(&path, e)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn sleep_for_duration(&self, duration: Duration) -> Result<(), LockError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
