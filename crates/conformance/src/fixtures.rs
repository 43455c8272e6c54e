//! Golden fixture paths.
//!
//! For every tested extension `ext` the fixture root holds two files:
//! - `test.<ext>`     -- the input document
//! - `test.<ext>.txt` -- the exact expected extracted text (UTF-8)

use std::path::{Path, PathBuf};

/// Default fixture root, relative to the working directory.
pub const DEFAULT_FIXTURE_ROOT: &str = "test/files";

/// Maps an extension tag to its fixture paths. Performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLayout {
    root: PathBuf,
}

impl Default for FixtureLayout {
    fn default() -> Self {
        FixtureLayout::new(DEFAULT_FIXTURE_ROOT)
    }
}

impl FixtureLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FixtureLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/test.<ext>`, or `<root>/test.<ext>.txt` for the expected-content file.
    pub fn path(&self, ext: &str, is_content_file: bool) -> PathBuf {
        let name = if is_content_file {
            format!("test.{}.txt", ext)
        } else {
            format!("test.{}", ext)
        };
        self.root.join(name)
    }

    pub fn input_path(&self, ext: &str) -> PathBuf {
        self.path(ext, false)
    }

    pub fn expected_path(&self, ext: &str) -> PathBuf {
        self.path(ext, true)
    }
}
