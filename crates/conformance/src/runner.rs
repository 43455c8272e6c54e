use std::io::Write;

use crate::capability::{self, CapabilityReport};
use crate::cases::{local_extensions, FormatCase};
use crate::fixtures::FixtureLayout;
use crate::invoker::{run_trial, Mode};
use crate::report::{Reporter, RunSummary};
use crate::traits::{DocumentSource, ExtractionConfig, OfficeParser};

/// Sequential conformance runner.
///
/// Cases run in declaration order. Each available case runs in file mode,
/// then buffer mode, and every trial is awaited before the next one starts,
/// so report lines never interleave and the engine never sees two
/// extractions at once. A failing trial does not stop the run.
///
/// The returned summary covers this run only, even when `reporter` has
/// already been used for earlier runs.
pub async fn run_suite<P, W>(
    engine: &P,
    cases: &[FormatCase],
    layout: &FixtureLayout,
    config: &ExtractionConfig,
    reporter: &mut Reporter<W>,
) -> RunSummary
where
    P: OfficeParser + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();
    for case in cases {
        if !case.test_available {
            summary.skipped += 1;
            reporter.skipped(&case.extension);
            continue;
        }
        for mode in [Mode::File, Mode::Buffer] {
            let outcome = run_trial(engine, layout, &case.extension, mode, config).await;
            summary.record(&outcome);
            reporter.trial(&case.extension, mode, &outcome);
        }
    }
    summary
}

/// Compare the case table against the engine's capability list and report
/// both directions. Returns `None` if the engine's list could not be read.
pub async fn check_capabilities<P, W>(
    engine: &P,
    cases: &[FormatCase],
    reporter: &mut Reporter<W>,
) -> Option<CapabilityReport>
where
    P: OfficeParser + ?Sized,
    W: Write,
{
    let engine_exts = match engine.supported_extensions().await {
        Ok(exts) => exts,
        Err(e) => {
            tracing::warn!(error = %e, "engine capability list unavailable");
            reporter.line(&format!(
                "warning: could not read engine capability list: {}",
                e
            ));
            return None;
        }
    };

    let report = capability::validate(&local_extensions(cases), &engine_exts);
    for line in report.lines() {
        reporter.line(&line);
    }
    Some(report)
}

/// Full-suite mode: capability check, then every case.
pub async fn run_all<P, W>(
    engine: &P,
    cases: &[FormatCase],
    layout: &FixtureLayout,
    config: &ExtractionConfig,
    reporter: &mut Reporter<W>,
) -> RunSummary
where
    P: OfficeParser + ?Sized,
    W: Write,
{
    check_capabilities(engine, cases, reporter).await;
    run_suite(engine, cases, layout, config, reporter).await
}

/// Why a single-target extraction produced no text.
#[derive(Debug, thiserror::Error)]
pub enum SingleTargetError {
    #[error("The requested extension test is not currently available.")]
    UnknownExtension(String),

    #[error(transparent)]
    Extraction(#[from] crate::error::ExtractionError),
}

/// Single-target mode: extract `ext`'s input fixture once, in file mode,
/// and return the raw text without any comparison.
///
/// Tags outside the case table are rejected before the engine is called.
pub async fn extract_single<P>(
    engine: &P,
    cases: &[FormatCase],
    layout: &FixtureLayout,
    config: &ExtractionConfig,
    ext: &str,
) -> Result<String, SingleTargetError>
where
    P: OfficeParser + ?Sized,
{
    if !cases.iter().any(|c| c.extension == ext) {
        return Err(SingleTargetError::UnknownExtension(ext.to_string()));
    }
    let text = engine
        .parse_office(DocumentSource::Path(layout.input_path(ext)), config)
        .await?;
    Ok(text)
}
