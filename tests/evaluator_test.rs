//! Tests for the expression evaluator core

use rstest::rstest;

use rscalc::domain::{Evaluator, Expr, ExpressionRecord, OperationKind};

#[rstest]
#[case(OperationKind::Add, 2.0, 3.0, 5.0)]
#[case(OperationKind::Sub, 5.0, 3.0, 2.0)]
#[case(OperationKind::Mul, 6.0, 7.0, 42.0)]
#[case(OperationKind::Div, 10.0, 4.0, 2.5)]
fn given_leaf_when_evaluating_then_applies_operator(
    #[case] op: OperationKind,
    #[case] left: f64,
    #[case] right: f64,
    #[case] expected: f64,
) {
    let evaluator = Evaluator::new();
    let record = ExpressionRecord::leaf(op, left, right);

    assert_eq!(evaluator.build_and_evaluate(&record), expected);
}

#[test]
fn given_sub_leaf_when_evaluating_then_operand_order_is_preserved() {
    let evaluator = Evaluator::new();

    let record = ExpressionRecord::leaf(OperationKind::Sub, 5.0, 3.0);
    assert_eq!(evaluator.build_and_evaluate(&record), 2.0);

    let flipped = ExpressionRecord::leaf(OperationKind::Sub, 3.0, 5.0);
    assert_eq!(evaluator.build_and_evaluate(&flipped), -2.0);
}

#[test]
fn given_zero_divisor_when_evaluating_then_follows_float_semantics() {
    let evaluator = Evaluator::new();

    let positive = ExpressionRecord::leaf(OperationKind::Div, 10.0, 0.0);
    assert_eq!(evaluator.build_and_evaluate(&positive), f64::INFINITY);

    let negative = ExpressionRecord::leaf(OperationKind::Div, -10.0, 0.0);
    assert_eq!(evaluator.build_and_evaluate(&negative), f64::NEG_INFINITY);

    let indeterminate = ExpressionRecord::leaf(OperationKind::Div, 0.0, 0.0);
    assert!(evaluator.build_and_evaluate(&indeterminate).is_nan());
}

#[test]
fn given_composite_when_evaluating_then_combines_sub_results() {
    // MUL(ADD(2,3), SUB(10,4)) = (2+3) * (10-4) = 30
    let evaluator = Evaluator::new();
    let record = ExpressionRecord::composite(
        OperationKind::Mul,
        ExpressionRecord::leaf(OperationKind::Add, 2.0, 3.0),
        ExpressionRecord::leaf(OperationKind::Sub, 10.0, 4.0),
    );

    assert_eq!(evaluator.build_and_evaluate(&record), 30.0);
}

#[test]
fn given_nested_composite_when_evaluating_then_reduces_depth_first() {
    // MUL(SUM(2,3), DIV(10,4)) = 5 * 2.5 = 12.5
    let evaluator = Evaluator::new();
    let record = ExpressionRecord::composite(
        OperationKind::Mul,
        ExpressionRecord::leaf(OperationKind::Add, 2.0, 3.0),
        ExpressionRecord::leaf(OperationKind::Div, 10.0, 4.0),
    );

    assert_eq!(evaluator.evaluate_all(&[record]), vec![12.5]);
}

#[test]
fn given_empty_input_when_evaluating_all_then_returns_empty() {
    let evaluator = Evaluator::new();
    assert!(evaluator.evaluate_all(&[]).is_empty());
}

#[test]
fn given_many_records_when_evaluating_all_then_output_matches_input_order() {
    let evaluator = Evaluator::new();
    let records = vec![
        ExpressionRecord::leaf(OperationKind::Add, 1.0, 1.0),
        ExpressionRecord::leaf(OperationKind::Sub, 1.0, 1.0),
        ExpressionRecord::leaf(OperationKind::Mul, 3.0, 3.0),
        ExpressionRecord::leaf(OperationKind::Div, 9.0, 3.0),
    ];

    assert_eq!(evaluator.evaluate_all(&records), vec![2.0, 0.0, 9.0, 3.0]);
}

#[test]
fn given_built_tree_when_evaluating_repeatedly_then_result_is_stable() {
    let evaluator = Evaluator::new();
    let record = ExpressionRecord::composite(
        OperationKind::Div,
        ExpressionRecord::leaf(OperationKind::Mul, 3.0, 4.0),
        ExpressionRecord::leaf(OperationKind::Sub, 10.0, 2.0),
    );

    let tree: Expr = evaluator.build(&record);
    let first = tree.evaluate();
    for _ in 0..5 {
        assert_eq!(tree.evaluate(), first);
    }
    assert_eq!(first, 1.5);
}
