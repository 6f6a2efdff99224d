use thiserror::Error;

/// Lock error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LockError {
    /// Lock storage could not be reached
    #[error("Lock storage is unavailable at {location}: {source}")]
    StorageUnavailable {
        location: String,
        source: std::io::Error,
    },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
