//! Collect phase - orders route files into the manifest.

use routegen_core::Result;

use crate::{
    manifest::collect_routes,
    pipeline::{GenerationContext, Phase},
};

pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Sort routes into the registration manifest"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.manifest = collect_routes(&ctx.route_files, ctx.config.scaffold().clone());

        tracing::info!(
            files = ctx.route_files.len(),
            routes = ctx.manifest.len(),
            "collected routes"
        );
        Ok(())
    }
}
