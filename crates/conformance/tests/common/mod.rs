//! Shared test engine and fixture helpers.
#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use officeparser_conformance::{
    DocumentSource, ExtractionConfig, ExtractionError, ExtractionResult, OfficeParser,
};

/// Which payload kind a recorded call received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Path(String),
    Buffer(usize),
}

/// An engine whose "documents" are plain UTF-8 text: extraction returns the
/// file contents unchanged.
pub struct EchoParser {
    supported: Result<Vec<String>, String>,
    buffer_suffix: Option<String>,
    calls: Mutex<Vec<Call>>,
    configs: Mutex<Vec<ExtractionConfig>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl EchoParser {
    pub fn new(supported: &[&str]) -> Self {
        EchoParser {
            supported: Ok(supported.iter().map(|s| s.to_string()).collect()),
            buffer_suffix: None,
            calls: Mutex::new(Vec::new()),
            configs: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn builtin() -> Self {
        EchoParser::new(&["docx", "xlsx", "pptx", "odt", "odp", "ods"])
    }

    /// Capability queries fail with `reason`.
    pub fn without_capabilities(mut self, reason: &str) -> Self {
        self.supported = Err(reason.to_string());
        self
    }

    /// Buffer-mode extractions get `suffix` appended, so they diverge from
    /// the file-mode result.
    pub fn with_buffer_suffix(mut self, suffix: &str) -> Self {
        self.buffer_suffix = Some(suffix.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The config each extraction call received, in call order.
    pub fn configs(&self) -> Vec<ExtractionConfig> {
        self.configs.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OfficeParser for EchoParser {
    async fn parse_office(
        &self,
        source: DocumentSource,
        config: &ExtractionConfig,
    ) -> ExtractionResult<String> {
        self.configs.lock().unwrap().push(*config);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let result = match source {
            DocumentSource::Path(path) => {
                self.calls
                    .lock()
                    .unwrap()
                    .push(Call::Path(path.display().to_string()));
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| ExtractionError::io(&path, e))
            }
            DocumentSource::Buffer(bytes) => {
                self.calls.lock().unwrap().push(Call::Buffer(bytes.len()));
                String::from_utf8(bytes)
                    .map(|text| match &self.buffer_suffix {
                        Some(suffix) => text + suffix,
                        None => text,
                    })
                    .map_err(|e| ExtractionError::Engine(e.to_string()))
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn supported_extensions(&self) -> ExtractionResult<Vec<String>> {
        self.supported.clone().map_err(ExtractionError::Engine)
    }
}

/// Write `test.<ext>` and a matching `test.<ext>.txt` under `root`.
pub fn write_fixture(root: &Path, ext: &str, text: &str) {
    std::fs::write(root.join(format!("test.{}", ext)), text).unwrap();
    std::fs::write(root.join(format!("test.{}.txt", ext)), text).unwrap();
}
