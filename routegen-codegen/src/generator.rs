//! One generator run, from input directory to written file.

use std::path::PathBuf;

use routegen_core::{GeneratedFile, GeneratorConfig, Result, WriteResult};

use crate::{
    manifest::RouteManifest,
    pipeline::{Diagnostic, GenerationContext, Pipeline},
    routes_file::RoutesFile,
};

/// Generates the route registration file for a configuration.
pub struct Generator {
    config: GeneratorConfig,
    pipeline: Pipeline,
}

/// What happened to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was written to disk.
    Written(WriteResult),
    /// Dry run: the content that would have been written.
    Preview(String),
}

/// Result of a generator run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the generated file.
    pub output_file: PathBuf,
    /// Registrations in emission order.
    pub manifest: RouteManifest,
    /// Lint warnings.
    pub warnings: Vec<Diagnostic>,
    pub outcome: Outcome,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            pipeline: Pipeline::new(),
        }
    }

    /// Use `pipeline` instead of the default one.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Run the pipeline and write the generated file.
    ///
    /// Nothing is written unless every phase succeeded.
    pub fn generate(&self) -> Result<GenerateResult> {
        let ctx = self.run_pipeline()?;
        let write = RoutesFile::new(&ctx.manifest).write(ctx.config.output_dir())?;

        tracing::info!(
            path = %self.config.output_file().display(),
            result = write.as_str(),
            "generated routes file"
        );
        Ok(self.finish(ctx, Outcome::Written(write)))
    }

    /// Run the pipeline and render the file without writing it.
    pub fn preview(&self) -> Result<GenerateResult> {
        let ctx = self.run_pipeline()?;
        let content = RoutesFile::new(&ctx.manifest).render();
        Ok(self.finish(ctx, Outcome::Preview(content)))
    }

    fn run_pipeline(&self) -> Result<GenerationContext> {
        self.pipeline.run(self.config.clone())
    }

    fn finish(&self, ctx: GenerationContext, outcome: Outcome) -> GenerateResult {
        GenerateResult {
            output_file: self.config.output_file(),
            manifest: ctx.manifest,
            warnings: ctx.diagnostics,
            outcome,
        }
    }
}
