//! Runner configuration, read from an optional TOML file.

use std::path::{Path, PathBuf};

use officeparser_conformance::cases::normalize_extension;
use officeparser_conformance::fixtures::DEFAULT_FIXTURE_ROOT;
use officeparser_conformance::{ExtractionConfig, FormatCase};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "officeparser-test.toml";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HarnessConfig {
    pub fixture_root: PathBuf,
    pub extraction: ExtractionSection,
    pub engine: EngineConfig,
    /// Replaces the built-in case table when present.
    pub cases: Option<Vec<FormatCase>>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            fixture_root: PathBuf::from(DEFAULT_FIXTURE_ROOT),
            extraction: ExtractionSection::default(),
            engine: EngineConfig::default(),
            cases: None,
        }
    }
}

/// `[extraction]`, written in snake_case in TOML.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ExtractionSection {
    pub preserve_temp_files: bool,
    pub output_error_to_console: bool,
}

impl Default for ExtractionSection {
    fn default() -> Self {
        let defaults = ExtractionConfig::default();
        ExtractionSection {
            preserve_temp_files: defaults.preserve_temp_files,
            output_error_to_console: defaults.output_error_to_console,
        }
    }
}

impl From<ExtractionSection> for ExtractionConfig {
    fn from(section: ExtractionSection) -> Self {
        ExtractionConfig {
            preserve_temp_files: section.preserve_temp_files,
            output_error_to_console: section.output_error_to_console,
        }
    }
}

/// `[engine]`: how to launch the extraction engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct EngineConfig {
    pub program: String,
    pub args: Vec<String>,
    pub capabilities_args: Vec<String>,
    /// Static capability list; skips querying the engine when set.
    pub supported_extensions: Option<Vec<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            program: "officeparser".to_string(),
            args: Vec::new(),
            capabilities_args: vec!["--supported-extensions".to_string()],
            supported_extensions: None,
        }
    }
}

impl HarnessConfig {
    /// Load `explicit` if given (it must exist), otherwise the default file if
    /// present, otherwise built-in defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(HarnessConfig::default());
                }
                default
            }
        };

        let src = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&src).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub(crate) fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// The configured case table with tags in canonical form, or the
    /// built-in table.
    pub(crate) fn cases(&self) -> Vec<FormatCase> {
        match &self.cases {
            Some(cases) => cases
                .iter()
                .map(|c| FormatCase::new(normalize_extension(&c.extension), c.test_available))
                .collect(),
            None => FormatCase::builtin(),
        }
    }
}
