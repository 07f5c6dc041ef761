//! Discover phase - finds handlers and derives a route for each page file.

use routegen_core::{Error, Result};
use routegen_syntax::SwiftParser;

use crate::{
    handlers::find_handlers,
    manifest::RouteFile,
    pipeline::{GenerationContext, Phase},
    route_path::route_path,
};

/// Phase that turns every source unit into a [`RouteFile`].
///
/// Stops at the first file that fails, so a page without a handler is
/// reported before later pages are looked at.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "Find request handlers and derive routes"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let suffix = ctx.config.source_suffix();
        let mut parser = SwiftParser::new().map_err(Error::parser_unavailable)?;
        let mut route_files = Vec::with_capacity(ctx.sources.len());

        for source in &ctx.sources {
            let file = parser
                .parse(&source.content)
                .map_err(|e| Error::parse(&source.relative_path, e))?;
            let handlers = find_handlers(&file);
            if handlers.is_empty() {
                return Err(Error::no_handlers_found(&source.relative_path));
            }

            let route = route_path(&source.relative_path, suffix)?;

            tracing::debug!(
                file = %source.relative_path,
                route = %route,
                handlers = handlers.len(),
                "discovered route"
            );
            route_files.push(RouteFile {
                route,
                source: source.relative_path.clone(),
                handlers,
            });
        }

        ctx.route_files = route_files;
        Ok(())
    }
}
