//! Builds the declaration tree from a tree-sitter-swift syntax tree.
//!
//! Only `class_declaration` nodes (struct, class, actor, enum, extension) and
//! `protocol_declaration` nodes become declarations. Every other node is
//! searched through, so local types inside methods and closures are found.

use tree_sitter::{Node, Parser};

use crate::{
    ast::{DeclKind, Declaration, SourceFile},
    error::ParseError,
};

const CLASS_DECLARATION: &str = "class_declaration";
const PROTOCOL_DECLARATION: &str = "protocol_declaration";
const INHERITANCE_SPECIFIER: &str = "inheritance_specifier";

/// Swift parser that can be reused across source files.
pub struct SwiftParser {
    parser: Parser,
}

impl SwiftParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_swift::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse Swift source into its declaration tree.
    ///
    /// Syntax errors do not fail the parse. Declarations are recovered from
    /// whatever the grammar could still make sense of.
    pub fn parse(&mut self, src: &str) -> Result<SourceFile, ParseError> {
        let tree = self.parser.parse(src, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("source has syntax errors, recovering declarations");
        }

        Ok(SourceFile {
            declarations: collect_declarations(root, src.as_bytes()),
        })
    }
}

/// Parse a single source file with a fresh [`SwiftParser`].
pub fn parse(src: &str) -> Result<SourceFile, ParseError> {
    SwiftParser::new()?.parse(src)
}

fn collect_declarations(node: Node<'_>, source: &[u8]) -> Vec<Declaration> {
    let mut found = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            CLASS_DECLARATION | PROTOCOL_DECLARATION => match declaration(child, source) {
                Some(decl) => found.push(decl),
                None => found.extend(collect_declarations(child, source)),
            },
            _ => found.extend(collect_declarations(child, source)),
        }
    }
    found
}

fn declaration(node: Node<'_>, source: &[u8]) -> Option<Declaration> {
    let keyword = declaration_keyword(node)?;
    let kind = DeclKind::from_keyword(keyword.utf8_text(source).ok()?)?;
    let name = node
        .child_by_field_name("name")
        .and_then(|name| name.utf8_text(source).ok())
        .map(compact)
        .filter(|name| !name.is_empty())?;

    let mut cursor = node.walk();
    let inherited: Vec<String> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == INHERITANCE_SPECIFIER)
        .filter_map(|spec| {
            let ty = spec.child_by_field_name("inherits_from").unwrap_or(spec);
            ty.utf8_text(source).ok().map(compact)
        })
        .collect();

    Some(Declaration {
        kind,
        name,
        inherited: (!inherited.is_empty()).then_some(inherited),
        members: collect_declarations(node, source),
        line: keyword.start_position().row + 1,
    })
}

/// The `struct`/`class`/... keyword, which comes after any attributes.
fn declaration_keyword<'t>(node: Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("declaration_kind").or_else(|| {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .find(|child| !child.is_named() && DeclKind::from_keyword(child.kind()).is_some())
    })
}

/// Type text with whitespace removed, e.g. `Wrapper< T >` becomes `Wrapper<T>`.
fn compact(text: &str) -> String {
    text.split_whitespace().collect()
}
