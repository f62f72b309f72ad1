//! LiveQ: typed filter-expression compilation and query building for
//! Livestatus monitoring tables.
//!
//! The core crate owns the expression AST, the filter-tree compiler, and
//! the GET query builder; the tables crate ships the static table
//! definitions and the registry. This facade re-exports both and provides
//! the combined error type plus a small convenience surface for the common
//! "filter tree in, wire text out" path.
#![warn(unreachable_pub)]

mod error;

pub use error::Error;

pub use liveq_core::{expr, filter, model, query, registry, value};
pub use liveq_tables as tables;
pub use liveq_tables::REGISTRY;

use liveq_core::{
    expr::Expr,
    filter::FilterInput,
    model::{Column, TableKind},
    query::Query,
};

/// Compile a filter input against the shipped registry with a typed table
/// context.
pub fn compile_filter<T: TableKind>(input: &FilterInput) -> Result<Expr, Error> {
    Ok(liveq_core::filter::compile_for::<T>(&REGISTRY, input)?)
}

/// Build a query over a shipped table, applying an optional pre-compiled
/// filter expression.
pub fn build_query<T: TableKind>(
    columns: impl IntoIterator<Item = Column>,
    filter: Expr,
) -> Result<Query, Error> {
    Ok(Query::new(T::MODEL, columns)?.filter(filter))
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, REGISTRY, build_query, compile_filter};
    pub use liveq_core::prelude::*;
    pub use liveq_tables::{
        Downtimes, Hostgroups, Hosts, Servicegroups, Services, Statehist,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn filter_tree_to_wire_text() {
        let node: FilterNode = serde_json::from_str(
            r#"{"op": "not", "expr": {"op": "~", "left": "name", "right": "^test"}}"#,
        )
        .unwrap();
        let expr = compile_filter::<Hosts>(&node.into()).unwrap();
        let query = build_query::<Hosts>([Hosts::name(), Hosts::state()], expr).unwrap();
        assert_eq!(
            query.compile(),
            "GET hosts\nColumns: name state\nFilter: name ~ ^test\nNegate: 1"
        );
    }

    #[test]
    fn errors_funnel_through_the_facade() {
        let node: FilterNode =
            serde_json::from_str(r#"{"op": "=", "left": "bogus", "right": 1}"#).unwrap();
        let err = compile_filter::<Hosts>(&node.into()).unwrap_err();
        assert!(matches!(err, Error::Filter(_)));
        assert_eq!(err.to_string(), "Table \"hosts\" has no column \"bogus\".");

        let err = build_query::<Hosts>([Services::description()], Expr::Nothing).unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }
}
