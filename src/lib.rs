//! rscalc: batch arithmetic calculator over expression-tree documents.
//!
//! Reads a document of nested binary operations, reduces each expression
//! tree to a number, and writes the results as a matching document. The
//! core lives in [`domain`]: an immutable expression node with a uniform
//! evaluate contract, and a recursive builder/evaluator over ingested
//! records. Document binding, filesystem access, and the CLI sit around it
//! as collaborators.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::{CalculatorService, EvalOutput};
pub use config::Settings;
pub use domain::{Evaluator, Expr, ExpressionRecord, OperationKind};
