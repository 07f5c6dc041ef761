//! State passed through pipeline phases.

use routegen_core::GeneratorConfig;

use super::Diagnostic;
use crate::{
    manifest::{RouteFile, RouteManifest},
    walker::SourceUnit,
};

/// Context passed through all pipeline phases.
///
/// Each phase fills in the part it owns; later phases read what earlier
/// phases produced.
#[derive(Debug)]
pub struct GenerationContext {
    /// Settings for this run.
    pub config: GeneratorConfig,
    /// Page files read from the input directory (populated by WalkPhase).
    pub sources: Vec<SourceUnit>,
    /// Per-file routes and handlers (populated by DiscoverPhase).
    pub route_files: Vec<RouteFile>,
    /// Ordered registrations (populated by CollectPhase).
    pub manifest: RouteManifest,
    /// Warnings collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(config: GeneratorConfig) -> Self {
        let manifest = RouteManifest {
            entries: Vec::new(),
            scaffold: config.scaffold().clone(),
        };
        Self {
            config,
            sources: Vec::new(),
            route_files: Vec::new(),
            manifest,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
