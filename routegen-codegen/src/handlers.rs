//! Handler discovery over a parsed page file.

use routegen_syntax::{Declaration, SourceFile, Visitor, Walk, walk};

/// Capability a handler type claims in its inheritance clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `RequestHandler`
    Sync,
    /// `AsyncRequestHandler`
    Async,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Sync, Capability::Async];

    /// The protocol name a declaration lists to claim this capability.
    pub fn marker(&self) -> &'static str {
        match self {
            Capability::Sync => "RequestHandler",
            Capability::Async => "AsyncRequestHandler",
        }
    }

    /// First capability claimed by `decl`, if any.
    pub fn claimed_by(decl: &Declaration) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| decl.inherits(cap.marker()))
    }
}

/// A struct or class found to claim a handler capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDeclaration {
    pub name: String,
    pub capability: Capability,
    pub line: usize,
}

/// Collects handler declarations.
///
/// A declaration that has an inheritance clause is inspected and its body is
/// never entered, whether it matched or not. Declarations without a clause
/// are descended into.
#[derive(Debug, Default)]
pub struct HandlerVisitor {
    handlers: Vec<HandlerDeclaration>,
}

impl HandlerVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_handlers(self) -> Vec<HandlerDeclaration> {
        self.handlers
    }
}

impl Visitor for HandlerVisitor {
    fn visit_declaration(&mut self, decl: &Declaration) -> Walk {
        if !decl.has_inheritance_clause() {
            return Walk::Continue;
        }

        if decl.kind.is_struct_or_class() {
            if let Some(capability) = Capability::claimed_by(decl) {
                tracing::trace!(handler = %decl.name, ?capability, line = decl.line, "found handler");
                self.handlers.push(HandlerDeclaration {
                    name: decl.name.clone(),
                    capability,
                    line: decl.line,
                });
            }
        }

        Walk::SkipChildren
    }
}

/// Find all handler declarations in `file`, sorted by name.
pub fn find_handlers(file: &SourceFile) -> Vec<HandlerDeclaration> {
    let mut visitor = HandlerVisitor::new();
    walk(file, &mut visitor);

    let mut handlers = visitor.into_handlers();
    handlers.sort_by(|a, b| a.name.cmp(&b.name));
    handlers
}

#[cfg(test)]
mod tests {
    use routegen_syntax::parse;

    use super::*;

    fn names(src: &str) -> Vec<String> {
        find_handlers(&parse(src).unwrap())
            .into_iter()
            .map(|h| h.name)
            .collect()
    }

    #[test]
    fn test_sync_and_async_handlers() {
        let handlers = find_handlers(
            &parse("struct Get: RequestHandler {}\nclass Post: AsyncRequestHandler {}").unwrap(),
        );

        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].name, "Get");
        assert_eq!(handlers[0].capability, Capability::Sync);
        assert_eq!(handlers[1].name, "Post");
        assert_eq!(handlers[1].capability, Capability::Async);
        assert_eq!(handlers[1].line, 2);
    }

    #[test]
    fn test_sorted_by_name() {
        assert_eq!(
            names("struct PostWorld: RequestHandler {}\nstruct GetWorld: RequestHandler {}"),
            vec!["GetWorld", "PostWorld"]
        );
    }

    #[test]
    fn test_other_conformances_are_ignored() {
        assert!(names("struct Model: Codable {}").is_empty());
        assert!(names("struct Plain {}").is_empty());
    }

    #[test]
    fn test_handler_among_other_conformances() {
        assert_eq!(
            names("final class Page: NSObject, AsyncRequestHandler, Sendable {}"),
            vec!["Page"]
        );
    }

    #[test]
    fn test_qualified_marker_does_not_match() {
        assert!(names("struct Page: Ginny.RequestHandler {}").is_empty());
    }

    #[test]
    fn test_only_structs_and_classes_count() {
        assert!(names("enum Page: RequestHandler {}").is_empty());
        assert!(names("actor Page: RequestHandler {}").is_empty());
        assert!(names("protocol Page: RequestHandler {}").is_empty());
        assert!(names("extension Page: RequestHandler {}").is_empty());
    }

    #[test]
    fn test_body_of_inspected_declaration_is_pruned() {
        let src = r#"
            struct Outer: RequestHandler {
                struct Inner: RequestHandler {}
            }
            struct Model: Codable {
                struct Hidden: RequestHandler {}
            }
        "#;

        assert_eq!(names(src), vec!["Outer"]);
    }

    #[test]
    fn test_declarations_without_clause_are_descended() {
        let src = r#"
            enum Pages {
                struct Nested: RequestHandler {}
            }
        "#;

        assert_eq!(names(src), vec!["Nested"]);
    }
}
