//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - API for building indented code

mod code_builder;

pub use code_builder::CodeBuilder;
