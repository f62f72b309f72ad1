use crate::{
    expr::{BinaryExpr, CompareOp, Expr},
    filter::{FilterError, FilterInput, FilterNode},
    model::{TableKind, TableModel},
    registry::TableRegistry,
};

/// Compile a filter input into an expression, resolving column references
/// against `registry`. `table` is the default context for bare column
/// names; a qualified `table.column` reference must agree with it.
///
/// Pure tree transform: each recursive call descends one node, and every
/// failure is returned immediately with no partial result.
pub fn compile(
    registry: &TableRegistry,
    input: &FilterInput,
    table: Option<&'static TableModel>,
) -> Result<Expr, FilterError> {
    match input {
        FilterInput::Compiled(expr) => Ok(expr.clone()),
        FilterInput::Tree(node) => compile_node(registry, node, table),
    }
}

/// Typed-context variant of [`compile`].
pub fn compile_for<T: TableKind>(
    registry: &TableRegistry,
    input: &FilterInput,
) -> Result<Expr, FilterError> {
    compile(registry, input, Some(T::MODEL))
}

fn compile_node(
    registry: &TableRegistry,
    node: &FilterNode,
    table: Option<&'static TableModel>,
) -> Result<Expr, FilterError> {
    match node {
        FilterNode::Compare { op, left, right } => {
            let op = CompareOp::from_symbol(op).ok_or_else(|| FilterError::UnknownOperator {
                op: op.clone(),
            })?;

            let (table_name, column_name) = match left.split_once('.') {
                Some((qualified, column)) => {
                    if let Some(context) = table
                        && context.name != qualified
                    {
                        return Err(FilterError::TableMismatch {
                            field: left.clone(),
                            table: context.name.to_string(),
                        });
                    }
                    (qualified, column)
                }
                None => {
                    let context = table.ok_or(FilterError::MissingTable)?;
                    (context.name, left.as_str())
                }
            };

            let column = registry.resolve(table_name, column_name).ok_or_else(|| {
                FilterError::UnknownColumn {
                    table: table_name.to_string(),
                    column: column_name.to_string(),
                }
            })?;

            Ok(Expr::Compare(BinaryExpr::new(
                column.name,
                op,
                right.clone(),
            )))
        }
        FilterNode::Combine { op, expr } => {
            let combine = match op.as_str() {
                "and" => Expr::and,
                "or" => Expr::or,
                other => {
                    return Err(FilterError::UnknownOperator {
                        op: other.to_string(),
                    });
                }
            };
            if expr.is_empty() {
                return Err(FilterError::EmptyCombination { op: op.clone() });
            }
            let members = expr
                .iter()
                .map(|node| compile_node(registry, node, table))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(combine(members))
        }
        FilterNode::Negate { op, expr } => {
            if op != "not" {
                return Err(FilterError::UnknownOperator { op: op.clone() });
            }

            Ok(Expr::not(compile_node(registry, expr, table)?))
        }
    }
}
