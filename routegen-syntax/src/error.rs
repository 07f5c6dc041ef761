use thiserror::Error;

/// Failure to run the Swift grammar over a source file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the Swift grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("the Swift parser produced no syntax tree")]
    NoTree,
}
