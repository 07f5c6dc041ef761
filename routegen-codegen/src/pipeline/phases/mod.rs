//! Built-in pipeline phases.
//!
//! - [`WalkPhase`] - reads page files from the input directory
//! - [`DiscoverPhase`] - finds handlers and derives routes per file
//! - [`CollectPhase`] - orders route files into the manifest
//! - [`LintPhase`] - records non-fatal warnings

mod collect;
mod discover;
mod lint;
mod walk;

pub use collect::CollectPhase;
pub use discover::DiscoverPhase;
pub use lint::{DuplicateRouteLint, IndexSuffixLint, Lint, LintPhase};
pub use walk::WalkPhase;
