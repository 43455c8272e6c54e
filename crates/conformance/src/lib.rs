//! officeparser conformance harness.
//!
//! Provides an `OfficeParser` trait for the extraction engine under test, a
//! sequential golden-file runner that exercises every format in both file
//! and buffer mode, a capability-list consistency check, and the
//! `officeparser_conformance_tests!` macro for embedding the suite in an
//! engine crate's own tests.

pub mod capability;
pub mod cases;
pub mod error;
pub mod fixtures;
pub mod invoker;
pub mod report;
pub mod runner;
pub mod suite;
pub mod traits;

pub use capability::{validate, CapabilityReport, SubsetCheck};
pub use cases::FormatCase;
pub use error::{ExtractionError, ExtractionResult};
pub use fixtures::FixtureLayout;
pub use invoker::{run_trial, Mode, TrialOutcome};
pub use report::{Reporter, RunSummary};
pub use runner::{check_capabilities, extract_single, run_all, run_suite, SingleTargetError};
pub use traits::{DocumentSource, ExtractionConfig, OfficeParser};
