use std::path::PathBuf;

/// Result type for extraction engine calls.
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Failures raised by an extraction engine or while preparing its input.
///
/// Every variant is caught per trial and reported as `Errored`; none of
/// them aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// A fixture or document could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine does not handle this format.
    #[error("unsupported format: {0}")]
    Unsupported(String),

    /// The engine failed while extracting (malformed document, crash, ...).
    #[error("engine error: {0}")]
    Engine(String),

    /// The engine produced output that is not valid extracted text.
    #[error("invalid engine output: {0}")]
    InvalidOutput(String),
}

impl ExtractionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractionError::Io {
            path: path.into(),
            source,
        }
    }
}
