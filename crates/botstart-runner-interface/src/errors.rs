use thiserror::Error;

/// Runner error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RunnerError {
    /// The build tool program could not be found
    #[error("Build tool `{program}` not found: {source}")]
    ToolNotFound {
        program: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The build tool process could not be started or awaited
    #[error("Could not execute target `{target}`: {source}")]
    ProcessError {
        target: String,
        source: std::io::Error,
    },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
