use std::fmt;
use std::time::Instant;

use crate::error::{ExtractionError, ExtractionResult};
use crate::fixtures::FixtureLayout;
use crate::traits::{DocumentSource, ExtractionConfig, OfficeParser};

/// How the input document is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The fixture path is passed as-is.
    File,
    /// The fixture is read fully into memory first.
    Buffer,
}

impl Mode {
    /// Report label, padded so both modes line up.
    pub fn label(self) -> &'static str {
        match self {
            Mode::File => "file  ",
            Mode::Buffer => "buffer",
        }
    }
}

/// Result of one (format, mode) trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    Passed,
    Failed,
    Errored(String),
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialOutcome::Passed => write!(f, "Passed"),
            TrialOutcome::Failed => write!(f, "Failed"),
            TrialOutcome::Errored(reason) => write!(f, "Errored: {}", reason),
        }
    }
}

/// Run one extraction of `ext` in `mode` and compare against the golden text.
///
/// Never fails: every error, whether reading the fixture, inside the engine,
/// or reading the expected text, is folded into `TrialOutcome::Errored`.
pub async fn run_trial<P>(
    engine: &P,
    layout: &FixtureLayout,
    ext: &str,
    mode: Mode,
    config: &ExtractionConfig,
) -> TrialOutcome
where
    P: OfficeParser + ?Sized,
{
    let started = Instant::now();
    tracing::debug!(ext, mode = mode.label().trim_end(), "trial started");

    let outcome = match extract_and_compare(engine, layout, ext, mode, config).await {
        Ok(true) => TrialOutcome::Passed,
        Ok(false) => TrialOutcome::Failed,
        Err(e) => TrialOutcome::Errored(e.to_string()),
    };

    tracing::debug!(
        ext,
        mode = mode.label().trim_end(),
        outcome = %outcome,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "trial finished"
    );
    outcome
}

async fn extract_and_compare<P>(
    engine: &P,
    layout: &FixtureLayout,
    ext: &str,
    mode: Mode,
    config: &ExtractionConfig,
) -> ExtractionResult<bool>
where
    P: OfficeParser + ?Sized,
{
    let input = layout.input_path(ext);
    let source = match mode {
        Mode::File => DocumentSource::Path(input),
        Mode::Buffer => {
            let bytes = tokio::fs::read(&input)
                .await
                .map_err(|e| ExtractionError::io(&input, e))?;
            DocumentSource::Buffer(bytes)
        }
    };

    let text = engine.parse_office(source, config).await?;

    let expected_path = layout.expected_path(ext);
    let expected = tokio::fs::read_to_string(&expected_path)
        .await
        .map_err(|e| ExtractionError::io(&expected_path, e))?;

    Ok(text == expected)
}
