//! Tree builder / evaluator: reduces expression records to numbers.

use tracing::debug;

use crate::domain::entities::ExpressionRecord;
use crate::domain::expr::Expr;

/// Builds expression-node trees from records and reduces them.
///
/// Stateless: each call is an independent one-shot reduction. Recursion
/// depth equals tree depth; no explicit bound is enforced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Construct the expression-node tree for one record.
    ///
    /// A leaf becomes two literal nodes under one operation node; a
    /// composite recursively builds both operands first.
    pub fn build(&self, record: &ExpressionRecord) -> Expr {
        match record {
            ExpressionRecord::Leaf { op, args } => Expr::operation(
                *op,
                Expr::literal(args[0]),
                Expr::literal(args[1]),
            ),
            ExpressionRecord::Composite { op, operands } => Expr::operation(
                *op,
                self.build(&operands[0]),
                self.build(&operands[1]),
            ),
        }
    }

    /// Build one record's tree and reduce it to a number.
    pub fn build_and_evaluate(&self, record: &ExpressionRecord) -> f64 {
        self.build(record).evaluate()
    }

    /// Evaluate every record in input order.
    ///
    /// The output has the same length as the input and `output[i]` is the
    /// result of `records[i]`.
    pub fn evaluate_all(&self, records: &[ExpressionRecord]) -> Vec<f64> {
        debug!("evaluate_all: {} records", records.len());
        records.iter().map(|r| self.build_and_evaluate(r)).collect()
    }
}
