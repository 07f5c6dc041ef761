//! Declaration tree produced by the parser.

/// Kind of a type-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Struct,
    Class,
    Actor,
    Enum,
    Protocol,
    Extension,
}

impl DeclKind {
    /// Map a Swift keyword to its declaration kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "struct" => Some(Self::Struct),
            "class" => Some(Self::Class),
            "actor" => Some(Self::Actor),
            "enum" => Some(Self::Enum),
            "protocol" => Some(Self::Protocol),
            "extension" => Some(Self::Extension),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Actor => "actor",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
        }
    }

    pub fn is_struct_or_class(&self) -> bool {
        matches!(self, Self::Struct | Self::Class)
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A type declaration and the declarations nested in its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Declared name (for extensions, the extended type path).
    pub name: String,
    /// Inheritance clause entries as written, `None` when there is no clause.
    pub inherited: Option<Vec<String>>,
    /// Declarations found inside the body, including local types in methods.
    pub members: Vec<Declaration>,
    /// 1-based line of the introducing keyword.
    pub line: usize,
}

impl Declaration {
    pub fn has_inheritance_clause(&self) -> bool {
        self.inherited.is_some()
    }

    /// Whether the inheritance clause names `ty` exactly.
    pub fn inherits(&self, ty: &str) -> bool {
        self.inherited
            .as_deref()
            .is_some_and(|types| types.iter().any(|t| t == ty))
    }
}

/// All top-level declarations of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub declarations: Vec<Declaration>,
}
