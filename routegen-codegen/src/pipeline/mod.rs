//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that takes one
//! [`GeneratorConfig`](routegen_core::GeneratorConfig) from the input
//! directory to an ordered route manifest:
//!
//! - Explicit phase boundaries (walk → discover → collect → lint)
//! - Fail-fast: the first error aborts the run before anything is written
//! - Non-fatal warnings collected as [`Diagnostic`]s
//! - Shared state via [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use routegen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(config)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("warning: {}", diag);
//! }
//!
//! let file = RoutesFile::new(&ctx.manifest);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::Diagnostic;
pub use phase::Phase;
pub use runner::Pipeline;
