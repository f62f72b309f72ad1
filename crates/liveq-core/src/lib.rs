//! Core query layer for Livestatus tables: comparison values, the boolean
//! expression AST, the filter-tree compiler, and the GET query builder.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod expr;
pub mod filter;
pub mod model;
pub mod query;
pub mod registry;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or rendering helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::{BinaryExpr, CompareOp, Expr},
        filter::{FilterInput, FilterNode},
        model::{ColType, Column, TableKind, TableModel},
        query::Query,
        registry::TableRegistry,
        value::Value,
    };
}
