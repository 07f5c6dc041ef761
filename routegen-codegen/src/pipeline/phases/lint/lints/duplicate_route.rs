//! Lint for routes derived from more than one file.

use indexmap::IndexMap;

use super::super::Lint;
use crate::pipeline::{Diagnostic, GenerationContext};

/// Lint that warns when two page files map to the same route.
///
/// Both files are still registered; which one the server matches first
/// depends on discovery order.
pub struct DuplicateRouteLint;

impl Lint for DuplicateRouteLint {
    fn name(&self) -> &'static str {
        "duplicate-route"
    }

    fn description(&self) -> &'static str {
        "Detect page files that derive the same route"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: IndexMap<&str, &str> = IndexMap::new();

        for file in &ctx.route_files {
            if let Some(first) = seen.get(file.route.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "route '/{}' is also derived from '{}'",
                            file.route, first
                        ),
                    )
                    .at(file.source.clone()),
                );
            } else {
                seen.insert(&file.route, &file.source);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use routegen_core::GeneratorConfig;

    use super::*;
    use crate::{
        handlers::{Capability, HandlerDeclaration},
        manifest::RouteFile,
    };

    fn context(files: &[(&str, &str)]) -> GenerationContext {
        let mut ctx = GenerationContext::new(GeneratorConfig::new("pages", "out"));
        ctx.route_files = files
            .iter()
            .map(|(route, source)| RouteFile {
                route: route.to_string(),
                source: source.to_string(),
                handlers: vec![HandlerDeclaration {
                    name: "Page".to_string(),
                    capability: Capability::Sync,
                    line: 1,
                }],
            })
            .collect();
        ctx
    }

    #[test]
    fn test_no_duplicates() {
        let ctx = context(&[("api", "api/index.swift"), ("user", "user.swift")]);

        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(&ctx, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_route() {
        let ctx = context(&[("api", "api/index.swift"), ("api", "api.swift")]);

        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(&ctx, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "route '/api' is also derived from 'api/index.swift'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("api.swift"));
    }

    #[test]
    fn test_duplicate_root_route() {
        let ctx = context(&[
            ("", "index.swift"),
            ("", "home.index.swift"),
            ("", "archindex.swift"),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(&ctx, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(
            diagnostics
                .iter()
                .all(|d| d.message.ends_with("'index.swift'"))
        );
    }
}
