//! The generated conformance tests, run against the checked-in text fixtures.

mod common;

use officeparser_conformance::officeparser_conformance_tests;

officeparser_conformance_tests!(
    common::EchoParser::builtin(),
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files")
);
