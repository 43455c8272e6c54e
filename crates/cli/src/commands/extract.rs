use std::process;

use officeparser_conformance::{extract_single, ExtractionConfig, FixtureLayout, SingleTargetError};

use crate::config::HarnessConfig;
use crate::engine::CommandParser;

/// Print the raw extracted text of one format's input fixture. No
/// comparison and no capability check.
pub(crate) fn cmd_extract(config: &HarnessConfig, ext: &str) {
    let engine = CommandParser::from_config(&config.engine);
    let layout = FixtureLayout::new(&config.fixture_root);
    let extraction = ExtractionConfig::from(config.extraction);

    let result = super::runtime().block_on(extract_single(
        &engine,
        &config.cases(),
        &layout,
        &extraction,
        ext,
    ));

    match result {
        Ok(text) => println!("{}", text),
        Err(e @ SingleTargetError::UnknownExtension(_)) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(SingleTargetError::Extraction(e)) => {
            println!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
