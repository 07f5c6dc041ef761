//! Declaration-level Swift scanner on top of tree-sitter-swift.
//!
//! Turns Swift source into a tree of type declarations, each carrying its
//! name and the names listed in its inheritance clause. Function bodies,
//! expressions and statements are not modelled.
//!
//! ```
//! use routegen_syntax::{DeclKind, parse};
//!
//! let file = parse("struct Index: RequestHandler {}")?;
//! let decl = &file.declarations[0];
//! assert_eq!(decl.kind, DeclKind::Struct);
//! assert!(decl.inherits("RequestHandler"));
//! # Ok::<(), routegen_syntax::ParseError>(())
//! ```

mod ast;
mod error;
mod parser;
mod visit;

pub use ast::{DeclKind, Declaration, SourceFile};
pub use error::ParseError;
pub use parser::{SwiftParser, parse};
pub use visit::{Visitor, Walk, walk, walk_declaration};
