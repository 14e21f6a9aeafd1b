//! Domain layer: expression records, nodes, and the evaluator
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod entities;
pub mod error;
pub mod evaluator;
pub mod expr;

pub use entities::{ExpressionRecord, OperationKind, RecordConvert};
pub use error::{DomainError, DomainResult};
pub use evaluator::Evaluator;
pub use expr::Expr;
