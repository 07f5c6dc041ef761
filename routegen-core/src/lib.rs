//! Core types for the routegen route-manifest generator.
//!
//! This crate provides the error taxonomy, the run configuration and
//! the generated-file writing shared by the other routegen crates.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{ConfigFile, DEFAULT_FILE_NAME, DEFAULT_SOURCE_SUFFIX, GeneratorConfig, Scaffold};
pub use error::{Error, Result};
pub use file::{GeneratedFile, WriteResult, write_file};
