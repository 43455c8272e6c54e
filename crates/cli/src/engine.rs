//! `OfficeParser` backed by an external engine process.
//!
//! Protocol:
//! - path mode:   `<program> <args...> <path>`
//! - buffer mode: `<program> <args...> -` with the document on stdin
//! - the run's `ExtractionConfig` is passed as JSON in `OFFICEPARSER_CONFIG`
//! - stdout is the extracted text, taken verbatim; non-zero exit is a failure
//! - capabilities: `<program> <capabilities_args...>` prints the supported
//!   extension tags, separated by whitespace or commas

use std::process::Stdio;

use async_trait::async_trait;
use officeparser_conformance::cases::normalize_extension;
use officeparser_conformance::{
    DocumentSource, ExtractionConfig, ExtractionError, ExtractionResult, OfficeParser,
};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::EngineConfig;

/// Environment variable carrying the serialized `ExtractionConfig`.
pub(crate) const CONFIG_ENV: &str = "OFFICEPARSER_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct CommandParser {
    program: String,
    args: Vec<String>,
    capabilities_args: Vec<String>,
    static_extensions: Option<Vec<String>>,
}

impl CommandParser {
    pub(crate) fn from_config(engine: &EngineConfig) -> Self {
        CommandParser {
            program: engine.program.clone(),
            args: engine.args.clone(),
            capabilities_args: engine.capabilities_args.clone(),
            static_extensions: engine.supported_extensions.clone(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> ExtractionError {
        ExtractionError::Engine(format!("cannot start {}: {}", self.program, e))
    }

    fn exit_error(&self, status: std::process::ExitStatus, stderr: &[u8]) -> ExtractionError {
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            ExtractionError::Engine(format!("{} exited with {}", self.program, status))
        } else {
            ExtractionError::Engine(format!(
                "{} exited with {}: {}",
                self.program, status, stderr
            ))
        }
    }
}

#[async_trait]
impl OfficeParser for CommandParser {
    async fn parse_office(
        &self,
        source: DocumentSource,
        config: &ExtractionConfig,
    ) -> ExtractionResult<String> {
        let config_json = serde_json::to_string(config)
            .map_err(|e| ExtractionError::Engine(format!("cannot encode config: {}", e)))?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        let stdin_bytes = match source {
            DocumentSource::Path(path) => {
                cmd.arg(path);
                None
            }
            DocumentSource::Buffer(bytes) => {
                cmd.arg("-");
                Some(bytes)
            }
        };
        cmd.env(CONFIG_ENV, config_json)
            .stdin(if stdin_bytes.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(if config.output_error_to_console {
                Stdio::inherit()
            } else {
                Stdio::piped()
            })
            .kill_on_drop(true);

        tracing::debug!(program = %self.program, buffered = stdin_bytes.is_some(), "spawning engine");
        let mut child = cmd.spawn().map_err(|e| self.spawn_error(e))?;

        let output = match (stdin_bytes, child.stdin.take()) {
            (Some(bytes), Some(mut stdin)) => {
                // Feed stdin while draining stdout so neither pipe can fill up.
                let feed = async move {
                    let result = stdin.write_all(&bytes).await;
                    drop(stdin);
                    result
                };
                let (fed, output) = tokio::join!(feed, child.wait_with_output());
                if let Err(e) = fed {
                    if e.kind() != std::io::ErrorKind::BrokenPipe {
                        return Err(ExtractionError::Engine(format!(
                            "cannot write document to {}: {}",
                            self.program, e
                        )));
                    }
                }
                output
            }
            _ => child.wait_with_output().await,
        }
        .map_err(|e| ExtractionError::Engine(format!("{} failed: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(self.exit_error(output.status, &output.stderr));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| ExtractionError::InvalidOutput(format!("text is not UTF-8: {}", e)))
    }

    async fn supported_extensions(&self) -> ExtractionResult<Vec<String>> {
        if let Some(list) = &self.static_extensions {
            return Ok(list.iter().map(|tag| normalize_extension(tag)).collect());
        }

        let output = Command::new(&self.program)
            .args(&self.capabilities_args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(self.exit_error(output.status, &output.stderr));
        }
        let text = String::from_utf8(output.stdout).map_err(|e| {
            ExtractionError::InvalidOutput(format!("capability list is not UTF-8: {}", e))
        })?;

        Ok(text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tag| !tag.is_empty())
            .map(normalize_extension)
            .collect())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn engine(program: &str, args: &[&str]) -> CommandParser {
        CommandParser::from_config(&EngineConfig {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            ..EngineConfig::default()
        })
    }

    fn quiet() -> ExtractionConfig {
        ExtractionConfig {
            output_error_to_console: false,
            ..ExtractionConfig::default()
        }
    }

    #[tokio::test]
    async fn path_mode_returns_stdout_verbatim() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("test.docx");
        std::fs::write(&path, "line one\n\n  line three  ").unwrap();

        let text = engine("cat", &[])
            .parse_office(DocumentSource::Path(path), &quiet())
            .await
            .unwrap();

        assert_eq!(text, "line one\n\n  line three  ");
    }

    #[tokio::test]
    async fn buffer_mode_feeds_stdin() {
        let text = engine("cat", &[])
            .parse_office(DocumentSource::Buffer(b"from memory".to_vec()), &quiet())
            .await
            .unwrap();

        assert_eq!(text, "from memory");
    }

    #[tokio::test]
    async fn config_is_passed_as_json() {
        let text = engine("sh", &["-c", "printf %s \"$OFFICEPARSER_CONFIG\"", "sh"])
            .parse_office(DocumentSource::Path("ignored".into()), &quiet())
            .await
            .unwrap();

        assert_eq!(
            text,
            r#"{"preserveTempFiles":true,"outputErrorToConsole":false}"#
        );
    }

    #[tokio::test]
    async fn failing_engine_reports_captured_stderr() {
        let err = engine("sh", &["-c", "echo corrupt zip >&2; exit 3", "sh"])
            .parse_office(DocumentSource::Path("test.pptx".into()), &quiet())
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("engine error: sh exited with"), "{}", msg);
        assert!(msg.ends_with("corrupt zip"), "{}", msg);
    }

    #[tokio::test]
    async fn missing_program_is_an_engine_error() {
        let err = engine("officeparser-definitely-not-installed", &[])
            .parse_office(DocumentSource::Path("test.odt".into()), &quiet())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Engine(ref m) if m.starts_with("cannot start")));
    }

    #[tokio::test]
    async fn capability_list_is_queried_and_normalized() {
        let parser = CommandParser::from_config(&EngineConfig {
            program: "echo".to_string(),
            capabilities_args: vec![".DOCX xlsx,pptx".to_string(), "odt".to_string()],
            ..EngineConfig::default()
        });

        let exts = parser.supported_extensions().await.unwrap();

        assert_eq!(exts, ["docx", "xlsx", "pptx", "odt"]);
    }

    #[tokio::test]
    async fn static_capability_list_skips_the_engine() {
        let parser = CommandParser::from_config(&EngineConfig {
            program: "officeparser-definitely-not-installed".to_string(),
            supported_extensions: Some(vec!["ODS".to_string()]),
            ..EngineConfig::default()
        });

        assert_eq!(parser.supported_extensions().await.unwrap(), ["ods"]);
    }
}
