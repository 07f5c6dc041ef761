//! Lint phase - records non-fatal warnings about the discovered routes.

pub mod lints;

pub use lints::{DuplicateRouteLint, IndexSuffixLint};
use routegen_core::Result;

use crate::pipeline::{Diagnostic, GenerationContext, Phase};

/// A check over the discovered routes.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Inspect the context and add any diagnostics.
    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>);
}

/// Phase that runs every registered lint.
///
/// Lints only warn; this phase never fails.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// Create a new lint phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![Box::new(DuplicateRouteLint), Box::new(IndexSuffixLint)],
        }
    }

    /// Create a lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get `(name, description)` for every lint that will be run.
    pub fn lint_descriptions(&self) -> Vec<(&'static str, &'static str)> {
        self.lints
            .iter()
            .map(|l| (l.name(), l.description()))
            .collect()
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Check routes for suspicious patterns"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut found = Vec::new();
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "{}", lint.description());
            lint.check(ctx, &mut found);
        }

        // The report is the user-facing channel for these.
        for diagnostic in &found {
            tracing::debug!(
                lint = diagnostic.lint,
                location = diagnostic.location.as_deref().unwrap_or(""),
                "{}",
                diagnostic.message
            );
        }

        ctx.diagnostics.extend(found);
        Ok(())
    }
}
