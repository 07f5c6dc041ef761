//! Pipeline orchestrator.

use routegen_core::{GeneratorConfig, Result};

use super::{
    GenerationContext, Phase,
    phases::{CollectPhase, DiscoverPhase, LintPhase, WalkPhase},
};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (walk, discover, collect, lint) followed by any
/// user phases. The first failing phase aborts the run.
///
/// # Example
///
/// ```no_run
/// use routegen_codegen::pipeline::Pipeline;
/// use routegen_core::GeneratorConfig;
///
/// let ctx = Pipeline::new().run(GeneratorConfig::new("Pages", "Generated"))?;
/// println!("{} routes", ctx.manifest.len());
/// # Ok::<(), Box<routegen_core::Error>>(())
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with no user phases. The built-in phases always
    /// run first, see [`Pipeline::run`].
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline for one configuration.
    ///
    /// Executes all phases in order:
    /// 1. WalkPhase - reads page files
    /// 2. DiscoverPhase - finds handlers, derives routes
    /// 3. CollectPhase - builds the ordered manifest
    /// 4. LintPhase - collects warnings
    /// 5. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns the first error any phase reports.
    pub fn run(&self, config: GeneratorConfig) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(config);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(WalkPhase),
            Box::new(DiscoverPhase),
            Box::new(CollectPhase),
            Box::new(LintPhase::new()),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
