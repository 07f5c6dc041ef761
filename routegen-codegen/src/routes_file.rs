//! The generated registration file.

use std::path::{Path, PathBuf};

use routegen_core::GeneratedFile;

use crate::{
    builder::CodeBuilder,
    manifest::{RouteEntry, RouteManifest},
};

/// Separator between registration statements.
///
/// Only the first statement gets the builder's indentation; later ones are
/// joined with a newline and two tabs. Existing generated files depend on
/// this exact layout.
const STATEMENT_SEPARATOR: &str = "\n\t\t";

/// `Routes.generated.swift`: an extension registering every route.
///
/// Route text is emitted verbatim, except that `\` and `"` are escaped so
/// the string literal stays valid Swift.
pub struct RoutesFile<'a> {
    manifest: &'a RouteManifest,
}

impl<'a> RoutesFile<'a> {
    pub fn new(manifest: &'a RouteManifest) -> Self {
        Self { manifest }
    }

    fn statement(&self, entry: &RouteEntry) -> String {
        format!(
            "{}().register(in: {}, for: \"{}\")",
            entry.handler,
            self.manifest.scaffold.receiver,
            escape_string_literal(&entry.route)
        )
    }

    fn statements(&self) -> String {
        self.manifest
            .entries
            .iter()
            .map(|entry| self.statement(entry))
            .collect::<Vec<_>>()
            .join(STATEMENT_SEPARATOR)
    }
}

impl GeneratedFile for RoutesFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.manifest.scaffold.file_name)
    }

    fn render(&self) -> String {
        let scaffold = &self.manifest.scaffold;
        let mut builder = CodeBuilder::new();

        builder
            .push_line(&format!("import {}", scaffold.module))
            .push_blank()
            .push_line(&format!("extension {} {{", scaffold.extended_type))
            .push_blank()
            .push_indent()
            .push_line(&format!("func {}() {{", scaffold.function))
            .push_indent()
            .push_line(&self.statements())
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_raw("}");

        builder.build()
    }
}

/// Escape `text` for use inside a Swift string literal.
fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use routegen_core::Scaffold;

    use super::*;

    fn manifest(entries: &[(&str, &str)]) -> RouteManifest {
        RouteManifest {
            entries: entries
                .iter()
                .map(|(route, handler)| RouteEntry {
                    route: route.to_string(),
                    handler: handler.to_string(),
                })
                .collect(),
            scaffold: Scaffold::default(),
        }
    }

    #[test]
    fn test_single_entry() {
        let manifest = manifest(&[("", "Index")]);

        assert_eq!(
            RoutesFile::new(&manifest).render(),
            "import Vapor\n\nextension Application {\n\n  func registerRoutes() {\n    Index().register(in: self, for: \"\")\n  }\n}"
        );
    }

    #[test]
    fn test_entries_are_tab_separated() {
        let manifest = manifest(&[("hello", "GetWorld"), ("hello", "PostWorld")]);

        let rendered = RoutesFile::new(&manifest).render();

        assert!(rendered.contains(
            "    GetWorld().register(in: self, for: \"hello\")\n\t\tPostWorld().register(in: self, for: \"hello\")\n  }"
        ));
    }

    #[test]
    fn test_empty_manifest_keeps_blank_statement_line() {
        let manifest = manifest(&[]);

        assert_eq!(
            RoutesFile::new(&manifest).render(),
            "import Vapor\n\nextension Application {\n\n  func registerRoutes() {\n    \n  }\n}"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let manifest = manifest(&[("api", "API")]);
        assert!(RoutesFile::new(&manifest).render().ends_with("}\n}"));
    }

    #[test]
    fn test_custom_scaffold() {
        let mut manifest = manifest(&[("user/:id", "User")]);
        manifest.scaffold = Scaffold {
            module: "Hummingbird".to_string(),
            extended_type: "Router".to_string(),
            function: "mountPages".to_string(),
            receiver: "router".to_string(),
            file_name: "Pages.swift".to_string(),
        };

        let file = RoutesFile::new(&manifest);

        assert_eq!(
            file.render(),
            "import Hummingbird\n\nextension Router {\n\n  func mountPages() {\n    User().register(in: router, for: \"user/:id\")\n  }\n}"
        );
        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/Pages.swift"));
    }

    #[test]
    fn test_route_is_escaped() {
        let manifest = manifest(&[("say\"hi\\", "Quote")]);

        let rendered = RoutesFile::new(&manifest).render();

        assert!(rendered.contains(r#"Quote().register(in: self, for: "say\"hi\\")"#));
    }
}
