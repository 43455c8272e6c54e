use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionResult;

/// Options handed unchanged to every extraction call of a run.
///
/// The harness never interprets these itself; temp-file lifecycle and error
/// echoing are the engine's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionConfig {
    pub preserve_temp_files: bool,
    pub output_error_to_console: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            preserve_temp_files: true,
            output_error_to_console: true,
        }
    }
}

/// The document payload passed to the engine: either a path on disk or
/// the full contents of that file already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Buffer(Vec<u8>),
}

/// Trait that any office-document extraction engine must implement to be
/// checked by the conformance harness.
#[async_trait]
pub trait OfficeParser: Send + Sync {
    /// Extract the plain text of a document.
    ///
    /// Must behave identically for a `Path` and a `Buffer` holding the same
    /// bytes, and must fail with a descriptive error for unsupported
    /// formats, missing files, or malformed documents.
    async fn parse_office(
        &self,
        source: DocumentSource,
        config: &ExtractionConfig,
    ) -> ExtractionResult<String>;

    /// The extension tags (lowercase, no leading dot) this engine claims to
    /// support, in the engine's own order.
    async fn supported_extensions(&self) -> ExtractionResult<Vec<String>>;
}
