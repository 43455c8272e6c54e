//! The ordered table of formats the harness knows how to test.

use serde::{Deserialize, Serialize};

/// One format under test. Identity is the extension tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCase {
    pub extension: String,
    #[serde(default = "default_test_available")]
    pub test_available: bool,
}

fn default_test_available() -> bool {
    true
}

/// Built-in cases, in run order.
const BUILTIN: &[(&str, bool)] = &[
    ("docx", true),
    ("xlsx", true),
    ("pptx", true),
    ("odt", true),
    ("odp", true),
    ("ods", true),
];

impl FormatCase {
    pub fn new(extension: impl Into<String>, test_available: bool) -> Self {
        FormatCase {
            extension: extension.into(),
            test_available,
        }
    }

    /// The built-in case table.
    pub fn builtin() -> Vec<FormatCase> {
        BUILTIN
            .iter()
            .map(|(ext, available)| FormatCase::new(*ext, *available))
            .collect()
    }
}

/// Canonical tag form: lowercase, without a leading dot.
pub fn normalize_extension(tag: &str) -> String {
    tag.trim_start_matches('.').to_lowercase()
}

/// Extension tags of `cases`, in declaration order (the harness's LocalSet).
pub fn local_extensions(cases: &[FormatCase]) -> Vec<String> {
    cases.iter().map(|c| c.extension.clone()).collect()
}
