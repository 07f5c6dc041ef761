//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Operations build reports, then render them to an Output target.

mod generate;
pub(crate) mod output;

pub use generate::{GenerateReport, GenerationResult, RouteLine};
pub use output::{Report, TerminalOutput};
