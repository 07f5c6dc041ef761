//! Built-in route lints.

mod duplicate_route;
mod index_suffix;

pub use duplicate_route::DuplicateRouteLint;
pub use index_suffix::IndexSuffixLint;
