//! Pipeline phase trait.

use routegen_core::Result;

use super::GenerationContext;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the generation context.
///
/// Built-in phases:
/// - `WalkPhase` - reads page files from the input directory
/// - `DiscoverPhase` - finds handlers and derives each file's route
/// - `CollectPhase` - orders everything into the route manifest
/// - `LintPhase` - records non-fatal warnings
pub trait Phase: Send + Sync {
    /// The name of this phase (used in logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
