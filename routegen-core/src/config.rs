//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built once at startup from the command line and
//! threaded through every pipeline phase. The optional `routegen.toml` file
//! only tweaks the emitted scaffold and the source suffix.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Suffix of the page files the walker picks up.
pub const DEFAULT_SOURCE_SUFFIX: &str = ".swift";

/// Name of the generated registration file.
pub const DEFAULT_FILE_NAME: &str = "Routes.generated.swift";

/// Fixed text surrounding the registration statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scaffold {
    /// Module imported at the top of the file.
    pub module: String,
    /// Type augmented by the generated extension.
    pub extended_type: String,
    /// Name of the generated registration function.
    pub function: String,
    /// Receiver passed as `in:` to every `register` call.
    pub receiver: String,
    /// File name of the artifact inside the output directory.
    pub file_name: String,
}

impl Default for Scaffold {
    fn default() -> Self {
        Self {
            module: "Vapor".to_string(),
            extended_type: "Application".to_string(),
            function: "registerRoutes".to_string(),
            receiver: "self".to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Contents of a `routegen.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub source_suffix: Option<String>,
    pub scaffold: Scaffold,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config from a string, naming `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }
}

/// Immutable settings for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    source_suffix: String,
    scaffold: Scaffold,
}

impl GeneratorConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            scaffold: Scaffold::default(),
        }
    }

    /// Apply the settings of a parsed config file.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(suffix) = file.source_suffix {
            self.source_suffix = suffix;
        }
        self.scaffold = file.scaffold;
        self
    }

    /// Override the page file suffix, e.g. from the command line.
    pub fn with_source_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn source_suffix(&self) -> &str {
        &self.source_suffix
    }

    pub fn scaffold(&self) -> &Scaffold {
        &self.scaffold
    }

    /// Full path of the generated file.
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(&self.scaffold.file_name)
    }
}
