//! Lint for components swallowed by the index rule.

use super::super::Lint;
use crate::{
    pipeline::{Diagnostic, GenerationContext},
    route_path::{is_index_component, path_components},
};

/// Lint that warns when a path component is dropped only because it happens
/// to end in `index`.
///
/// `index` and `<name>.index` are the intended markers. Something like
/// `archindex` is elided as well, which is rarely what the author meant.
pub struct IndexSuffixLint;

impl IndexSuffixLint {
    fn is_intended_marker(component: &str) -> bool {
        component == "index" || component.ends_with(".index")
    }
}

impl Lint for IndexSuffixLint {
    fn name(&self) -> &'static str {
        "index-suffix"
    }

    fn description(&self) -> &'static str {
        "Flag path components elided by the index rule by accident"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        let suffix = ctx.config.source_suffix();

        for file in &ctx.route_files {
            for component in path_components(&file.source, suffix) {
                if is_index_component(component) && !Self::is_intended_marker(component) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "'{}' ends in 'index' and is left out of route '/{}'",
                                component, file.route
                            ),
                        )
                        .at(file.source.clone()),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use routegen_core::GeneratorConfig;

    use super::*;
    use crate::manifest::RouteFile;

    fn check(sources: &[(&str, &str)]) -> Vec<Diagnostic> {
        let mut ctx = GenerationContext::new(GeneratorConfig::new("pages", "out"));
        ctx.route_files = sources
            .iter()
            .map(|(route, source)| RouteFile {
                route: route.to_string(),
                source: source.to_string(),
                handlers: Vec::new(),
            })
            .collect();

        let mut diagnostics = Vec::new();
        IndexSuffixLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_index_markers_are_fine() {
        let diagnostics = check(&[
            ("", "index.swift"),
            ("api", "api/index.swift"),
            ("hello", "hello/hello.index.swift"),
        ]);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_accidental_suffix_is_flagged() {
        let diagnostics = check(&[("blog", "blog/archindex.swift")]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "'archindex' ends in 'index' and is left out of route '/blog'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("blog/archindex.swift"));
    }

    #[test]
    fn test_directory_component_is_checked() {
        let diagnostics = check(&[("page", "reindex/page.swift")]);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("'reindex'"));
    }
}
