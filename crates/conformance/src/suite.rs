//! The `officeparser_conformance_tests!` macro.
//!
//! This macro generates two `#[tokio::test]` functions for any type that
//! implements `OfficeParser`: one checks that the engine's capability list
//! matches the case table in both directions, the other runs every case in
//! file and buffer mode against the golden fixtures.
//!
//! # Usage
//!
//! ```rust,ignore
//! use officeparser_conformance::officeparser_conformance_tests;
//!
//! struct MyParser;
//!
//! // Implement OfficeParser for MyParser ...
//!
//! officeparser_conformance_tests!(MyParser, "test/files");
//!
//! // Or with a custom case table:
//! officeparser_conformance_tests!(MyParser, "test/files", vec![FormatCase::new("docx", true)]);
//! ```
//!
//! The generated tests are named `conformance_*` and can be run with
//! `cargo test conformance_`.

/// Generate conformance tests for an engine implementation.
///
/// `$engine_expr` is evaluated fresh for each test. `$fixture_root` is any
/// `Into<PathBuf>` naming the directory holding `test.<ext>` and
/// `test.<ext>.txt`. Unlike the console runner, the generated tests treat a
/// capability mismatch as a test failure.
#[macro_export]
macro_rules! officeparser_conformance_tests {
    ($engine_expr:expr, $fixture_root:expr) => {
        $crate::officeparser_conformance_tests!(
            $engine_expr,
            $fixture_root,
            $crate::FormatCase::builtin()
        );
    };
    ($engine_expr:expr, $fixture_root:expr, $cases_expr:expr) => {
        #[tokio::test]
        async fn conformance_capability_list_matches_cases() {
            let engine = $engine_expr;
            let cases: Vec<$crate::FormatCase> = $cases_expr;
            let mut reporter = $crate::Reporter::new(Vec::<u8>::new());
            let report = $crate::check_capabilities(&engine, &cases, &mut reporter)
                .await
                .expect("engine capability list unavailable");
            assert!(
                report.is_consistent(),
                "capability list mismatch:\n{}",
                String::from_utf8_lossy(&reporter.into_inner())
            );
        }

        #[tokio::test]
        async fn conformance_all_formats_match_golden_text() {
            let engine = $engine_expr;
            let cases: Vec<$crate::FormatCase> = $cases_expr;
            let layout = $crate::FixtureLayout::new($fixture_root);
            let config = $crate::ExtractionConfig::default();
            let mut reporter = $crate::Reporter::new(Vec::<u8>::new());
            let summary = $crate::run_suite(&engine, &cases, &layout, &config, &mut reporter).await;
            assert!(
                summary.is_success(),
                "conformance failures:\n{}",
                String::from_utf8_lossy(&reporter.into_inner())
            );
        }
    };
}
