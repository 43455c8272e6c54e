//! Console report lines and outcome tallies.

use std::io::Write;

use crate::invoker::{Mode, TrialOutcome};

/// Counts of trial outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
}

impl RunSummary {
    /// True when no trial failed or errored.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    pub fn record(&mut self, outcome: &TrialOutcome) {
        match outcome {
            TrialOutcome::Passed => self.passed += 1,
            TrialOutcome::Failed => self.failed += 1,
            TrialOutcome::Errored(_) => self.errored += 1,
        }
    }
}

/// Writes report lines to a sink and keeps a `RunSummary` over everything
/// it has reported, across runs if the reporter is reused.
///
/// Write errors are ignored: the report is console output and a closed
/// pipe must not abort the run.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    summary: RunSummary,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Reporter::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter {
            out,
            summary: RunSummary::default(),
        }
    }

    /// `[docx: file  ] => Passed`
    pub fn trial(&mut self, ext: &str, mode: Mode, outcome: &TrialOutcome) {
        self.summary.record(outcome);
        self.line(&format!("[{:<4}: {}] => {}", ext, mode.label(), outcome));
    }

    /// `[odt]=> Skipped`
    pub fn skipped(&mut self, ext: &str) {
        self.summary.skipped += 1;
        self.line(&format!("[{}]=> Skipped", ext));
    }

    pub fn line(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    /// Closing tally line.
    pub fn finish(&mut self) {
        let s = self.summary;
        self.line(&format!(
            "{} passed, {} failed, {} errored, {} skipped",
            s.passed, s.failed, s.errored, s.skipped
        ));
        let _ = self.out.flush();
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
