use crate::{
    expr::{BinaryExpr, CompareOp, Expr},
    filter::{FilterError, FilterInput, FilterNode, compile},
    test_fixtures::{hosts, registry, services},
    value::Value,
};
use proptest::prelude::*;

fn cmp(op: &str, left: &str, right: &str) -> FilterNode {
    FilterNode::Compare {
        op: op.to_string(),
        left: left.to_string(),
        right: Value::Text(right.to_string()),
    }
}

fn compile_node(node: FilterNode, table: Option<&'static str>) -> Result<Expr, FilterError> {
    let table = table.map(|name| registry().table(name).unwrap());
    compile(registry(), &FilterInput::Tree(node), table)
}

#[test]
fn qualified_comparison_resolves() {
    let expr = compile_node(cmp("=", "hosts.name", "example.com"), None).unwrap();
    assert_eq!(
        expr,
        Expr::Compare(BinaryExpr::new("name", CompareOp::Equal, "example.com"))
    );
    assert_eq!(expr.to_string(), "Filter(name = example.com)");
}

#[test]
fn bare_column_uses_table_context() {
    let expr = compile_node(cmp("!=", "name", "example.com"), Some("hosts")).unwrap();
    assert_eq!(
        expr,
        Expr::Compare(BinaryExpr::new("name", CompareOp::NotEqual, "example.com"))
    );
}

#[test]
fn qualified_reference_may_restate_the_context() {
    let expr = compile_node(cmp("=", "hosts.name", "heute"), Some("hosts")).unwrap();
    assert_eq!(expr, Expr::eq("name", "heute"));
}

#[test]
fn bare_column_without_context_is_an_error() {
    let err = compile_node(cmp("=", "name", "example.com"), None).unwrap_err();
    assert_eq!(err, FilterError::MissingTable);
    assert!(err.to_string().contains("Missing table parameter."));
}

#[test]
fn conflicting_table_context_is_an_error() {
    let err = compile_node(cmp("=", "hosts.name", "example.com"), Some("services")).unwrap_err();
    assert_eq!(
        err,
        FilterError::TableMismatch {
            field: "hosts.name".to_string(),
            table: "services".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("hosts.name"));
    assert!(message.contains("services"));
}

#[test]
fn unknown_column_is_an_error() {
    let err = compile_node(cmp("=", "hosts.foo", "bar"), None).unwrap_err();
    assert_eq!(err.to_string(), "Table \"hosts\" has no column \"foo\".");

    // Unknown table surfaces through the same lookup error.
    let err = compile_node(cmp("=", "nonexistent.name", "bar"), None).unwrap_err();
    assert_eq!(
        err,
        FilterError::UnknownColumn {
            table: "nonexistent".to_string(),
            column: "name".to_string(),
        }
    );
}

#[test]
fn unknown_operator_is_an_error() {
    let node = FilterNode::Negate {
        op: "bogus".to_string(),
        expr: Box::new(cmp("=", "hosts.name", "heute")),
    };
    let err = compile_node(node, None).unwrap_err();
    assert_eq!(err.to_string(), "Unknown operator: bogus");

    let node = FilterNode::Combine {
        op: "xor".to_string(),
        expr: vec![cmp("=", "hosts.name", "heute")],
    };
    let err = compile_node(node, None).unwrap_err();
    assert_eq!(err.to_string(), "Unknown operator: xor");

    let err = compile_node(cmp("==", "hosts.name", "heute"), None).unwrap_err();
    assert_eq!(err.to_string(), "Unknown operator: ==");
}

#[test]
fn compiled_expressions_pass_through_unchanged() {
    let expr = Expr::not(Expr::eq("name", "heute"));
    let out = compile(registry(), &FilterInput::Compiled(expr.clone()), None).unwrap();
    assert_eq!(out, expr);

    // Pass-through skips validation entirely; the table context is unused.
    let out = compile(
        registry(),
        &FilterInput::Compiled(expr.clone()),
        Some(services()),
    )
    .unwrap();
    assert_eq!(out, expr);
}

#[test]
fn boolean_composition_is_structural() {
    let a = cmp("=", "name", "alpha");
    let b = cmp(">", "state", "0");
    let node = FilterNode::Combine {
        op: "and".to_string(),
        expr: vec![a.clone(), b.clone()],
    };

    let expected = Expr::And(vec![
        compile_node(a.clone(), Some("hosts")).unwrap(),
        compile_node(b.clone(), Some("hosts")).unwrap(),
    ]);
    assert_eq!(compile_node(node, Some("hosts")).unwrap(), expected);

    let node = FilterNode::Combine {
        op: "or".to_string(),
        expr: vec![a.clone(), b.clone()],
    };
    let expected = Expr::Or(vec![
        compile_node(a, Some("hosts")).unwrap(),
        compile_node(b, Some("hosts")).unwrap(),
    ]);
    assert_eq!(compile_node(node, Some("hosts")).unwrap(), expected);
}

#[test]
fn double_negation_is_preserved() {
    let inner = cmp("=", "name", "heute");
    let node = FilterNode::Negate {
        op: "not".to_string(),
        expr: Box::new(FilterNode::Negate {
            op: "not".to_string(),
            expr: Box::new(inner.clone()),
        }),
    };
    let expected = Expr::not(Expr::not(compile_node(inner, Some("hosts")).unwrap()));
    assert_eq!(compile_node(node, Some("hosts")).unwrap(), expected);
}

#[test]
fn empty_combination_is_rejected() {
    let node = FilterNode::Combine {
        op: "and".to_string(),
        expr: vec![],
    };
    let err = compile_node(node, Some("hosts")).unwrap_err();
    assert_eq!(
        err,
        FilterError::EmptyCombination {
            op: "and".to_string(),
        }
    );
}

#[test]
fn errors_propagate_out_of_nested_trees() {
    let node = FilterNode::Combine {
        op: "and".to_string(),
        expr: vec![
            cmp("=", "name", "heute"),
            FilterNode::Negate {
                op: "not".to_string(),
                expr: Box::new(cmp("=", "bogus_column", "x")),
            },
        ],
    };
    let err = compile_node(node, Some("hosts")).unwrap_err();
    assert_eq!(
        err,
        FilterError::UnknownColumn {
            table: "hosts".to_string(),
            column: "bogus_column".to_string(),
        }
    );
}

#[test]
fn wire_grammar_deserializes() {
    let node: FilterNode = serde_json::from_str(
        r#"{"op": "=", "left": "hosts.name", "right": "example.com"}"#,
    )
    .unwrap();
    assert_eq!(node, cmp("=", "hosts.name", "example.com"));

    let node: FilterNode = serde_json::from_str(
        r#"{"op": "and", "expr": [
            {"op": "not", "expr": {"op": "or", "expr": [
                {"op": "=", "left": "name", "right": "foo"},
                {"op": "=", "left": "name", "right": "bar"}
            ]}}
        ]}"#,
    )
    .unwrap();
    let expr = compile_node(node, Some("hosts")).unwrap();
    assert_eq!(
        expr,
        Expr::And(vec![Expr::not(Expr::Or(vec![
            Expr::eq("name", "foo"),
            Expr::eq("name", "bar"),
        ]))])
    );
}

#[test]
fn numeric_literals_stay_numeric() {
    let node: FilterNode =
        serde_json::from_str(r#"{"op": ">", "left": "state", "right": 0}"#).unwrap();
    let expr = compile_node(node, Some("hosts")).unwrap();
    assert_eq!(
        expr,
        Expr::Compare(BinaryExpr::new("state", CompareOp::Greater, 0))
    );
}

// ---- property tests ----------------------------------------------------

fn fixture_column() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("name"),
        Just("address"),
        Just("state"),
        Just("last_check"),
        Just("groups"),
    ]
}

fn comparison_op() -> impl Strategy<Value = CompareOp> {
    proptest::sample::select(CompareOp::ALL.to_vec())
}

fn leaf() -> impl Strategy<Value = FilterNode> {
    (fixture_column(), comparison_op(), "[a-z0-9.]{0,12}").prop_map(|(column, op, right)| {
        FilterNode::Compare {
            op: op.symbol().to_string(),
            left: column.to_string(),
            right: Value::Text(right),
        }
    })
}

fn tree() -> impl Strategy<Value = FilterNode> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (proptest::sample::select(vec!["and", "or"]), prop::collection::vec(inner.clone(), 1..4))
                .prop_map(|(op, expr)| FilterNode::Combine {
                    op: op.to_string(),
                    expr,
                }),
            inner.prop_map(|expr| FilterNode::Negate {
                op: "not".to_string(),
                expr: Box::new(expr),
            }),
        ]
    })
}

proptest! {
    #[test]
    fn well_formed_trees_compile(node in tree()) {
        let expr = compile_node(node, Some("hosts")).unwrap();
        // Every compiled tree also renders without panicking.
        let _ = expr.render();
    }

    #[test]
    fn compilation_commutes_with_combination(members in prop::collection::vec(leaf(), 1..5)) {
        let combined = FilterNode::Combine {
            op: "and".to_string(),
            expr: members.clone(),
        };
        let expected = Expr::And(
            members
                .into_iter()
                .map(|member| compile_node(member, Some("hosts")).unwrap())
                .collect(),
        );
        prop_assert_eq!(compile_node(combined, Some("hosts")).unwrap(), expected);
    }

    #[test]
    fn bare_columns_fail_without_context(node in leaf()) {
        prop_assert_eq!(compile_node(node, None).unwrap_err(), FilterError::MissingTable);
    }
}

#[test]
fn fixture_tables_cover_the_grammar() {
    // Keep the fixture columns in sync with the strategies above.
    for column in ["name", "address", "state", "last_check", "groups"] {
        assert!(hosts().column(column).is_some());
    }
}
