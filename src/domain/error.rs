//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid expression input.
/// These are independent of document and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown operation tag: {tag}")]
    UnknownOperation { tag: String },

    #[error("leaf operation requires exactly 2 args, got {got}")]
    MalformedLeaf { got: usize },

    #[error("composite operation requires exactly 2 operands, got {got}")]
    MalformedComposite { got: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
