//! Filter-tree input grammar and its compiler.
//!
//! A filter arrives as a JSON tree of comparison and boolean nodes
//! (`FilterNode`) or as an already-compiled expression; `FilterInput` is
//! the tagged union over the two, so the pass-through case is a variant
//! match rather than a runtime type probe. `compile` lowers the tree into
//! an [`Expr`](crate::expr::Expr) validated against a table registry.

mod compile;

pub use compile::{compile, compile_for};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::{expr::Expr, value::Value};

#[cfg(test)]
mod tests;

///
/// FilterNode
///
/// Wire grammar of one filter-tree node. The `op` field discriminates at
/// compile time, not at deserialization time, so an unrecognized operator
/// still parses into the shape it was written in and fails with the
/// operator error rather than a serde error.
///

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FilterNode {
    /// `{"op": "=", "left": "hosts.name", "right": "example.com"}`
    Compare {
        op: String,
        left: String,
        right: Value,
    },
    /// `{"op": "and", "expr": [ ... ]}`
    Combine { op: String, expr: Vec<FilterNode> },
    /// `{"op": "not", "expr": { ... }}`
    Negate { op: String, expr: Box<FilterNode> },
}

///
/// FilterInput
///
/// Compiler input: a wire tree or a previously compiled expression. The
/// compiled variant passes through unchanged.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FilterInput {
    Tree(FilterNode),
    Compiled(Expr),
}

impl From<FilterNode> for FilterInput {
    fn from(node: FilterNode) -> Self {
        Self::Tree(node)
    }
}

impl From<Expr> for FilterInput {
    fn from(expr: Expr) -> Self {
        Self::Compiled(expr)
    }
}

///
/// FilterError
///
/// Every compiler failure is synchronous and final; messages carry the
/// offending names so the API boundary can surface them verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    #[error("Unknown operator: {op}")]
    UnknownOperator { op: String },

    #[error("Missing table parameter.")]
    MissingTable,

    #[error("Field {field:?} can only query table {table:?}.")]
    TableMismatch { field: String, table: String },

    #[error("Table {table:?} has no column {column:?}.")]
    UnknownColumn { table: String, column: String },

    #[error("Combination {op:?} requires at least one expression.")]
    EmptyCombination { op: String },
}
