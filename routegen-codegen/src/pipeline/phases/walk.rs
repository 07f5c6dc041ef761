//! Walk phase - reads every page file under the input directory.

use routegen_core::Result;

use crate::{
    pipeline::{GenerationContext, Phase},
    walker::{SourceUnit, find_source_files},
};

pub struct WalkPhase;

impl Phase for WalkPhase {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn description(&self) -> &'static str {
        "Read page files from the input directory"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let files = find_source_files(ctx.config.input_dir(), ctx.config.source_suffix())?;

        ctx.sources = files
            .into_iter()
            .map(|(relative, path)| SourceUnit::read(relative, path))
            .collect::<Result<_>>()?;

        tracing::debug!(
            input = %ctx.config.input_dir().display(),
            files = ctx.sources.len(),
            "read page files"
        );
        Ok(())
    }
}
