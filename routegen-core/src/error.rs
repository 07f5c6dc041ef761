use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for routegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("input directory '{}' does not exist or cannot be read", .path.display())]
    #[diagnostic(
        code(routegen::missing_input_directory),
        help("pass the directory that contains your page files as the first argument")
    )]
    MissingInputDirectory { path: PathBuf },

    #[error("no request handlers found in '{file}'")]
    #[diagnostic(
        code(routegen::no_handlers),
        help(
            "every page file must declare at least one struct or class conforming to `RequestHandler` or `AsyncRequestHandler`"
        )
    )]
    NoHandlersFound { file: String },

    #[error("failed to create '{}'", .path.display())]
    #[diagnostic(code(routegen::write_failed))]
    FailedToCreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route parameter '{component}' in '{path}'")]
    #[diagnostic(
        code(routegen::invalid_parameter),
        help("use `[name]` for a named parameter or `[...name]` for a catch-all segment")
    )]
    InvalidParameter { component: String, path: String },

    #[error("the Swift parser could not be initialised: {reason}")]
    #[diagnostic(
        code(routegen::parser_unavailable),
        help("routegen was built against an incompatible tree-sitter-swift grammar")
    )]
    ParserUnavailable { reason: String },

    #[error("failed to parse '{file}': {reason}")]
    #[diagnostic(code(routegen::parse))]
    Parse { file: String, reason: String },

    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(routegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(routegen::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub fn missing_input_directory(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::MissingInputDirectory { path: path.into() })
    }

    pub fn no_handlers_found(file: impl Into<String>) -> Box<Self> {
        Box::new(Error::NoHandlersFound { file: file.into() })
    }

    pub fn failed_to_create_file(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::FailedToCreateFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn invalid_parameter(component: impl Into<String>, path: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidParameter {
            component: component.into(),
            path: path.into(),
        })
    }

    pub fn parser_unavailable(reason: impl std::fmt::Display) -> Box<Self> {
        Box::new(Error::ParserUnavailable {
            reason: reason.to_string(),
        })
    }

    pub fn parse(file: impl Into<String>, reason: impl std::fmt::Display) -> Box<Self> {
        Box::new(Error::Parse {
            file: file.into(),
            reason: reason.to_string(),
        })
    }

    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a config error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
