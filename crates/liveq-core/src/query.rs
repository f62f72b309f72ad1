//! GET query builder.
//!
//! A query is a table, a column projection, and a filter expression; it
//! compiles into the wire text understood by the Livestatus socket
//! (`GET <table>`, `Columns: ...`, then the rendered filter lines).
//! Execution against a site connection is out of scope here.

use crate::{
    expr::Expr,
    model::{Column, TableModel},
};
use thiserror::Error as ThisError;

///
/// QueryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("A query needs at least one column.")]
    NoColumns,

    #[error("Column {column:?} belongs to table {column_table:?}, not {table:?}.")]
    ForeignColumn {
        column: String,
        column_table: String,
        table: String,
    },
}

///
/// Query
///

#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    table: &'static TableModel,
    columns: Vec<Column>,
    filter: Expr,
}

impl Query {
    /// Build a query over `table` projecting `columns`. Every column must
    /// belong to the table; the first foreign column aborts construction.
    pub fn new(
        table: &'static TableModel,
        columns: impl IntoIterator<Item = Column>,
    ) -> Result<Self, QueryError> {
        let columns: Vec<Column> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(QueryError::NoColumns);
        }
        for column in &columns {
            if column.table != table.name {
                return Err(QueryError::ForeignColumn {
                    column: column.name.to_string(),
                    column_table: column.table.to_string(),
                    table: table.name.to_string(),
                });
            }
        }

        Ok(Self {
            table,
            columns,
            filter: Expr::Nothing,
        })
    }

    #[must_use]
    pub const fn table(&self) -> &'static TableModel {
        self.table
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub const fn filter_expr(&self) -> &Expr {
        &self.filter
    }

    /// AND the given expression onto the current filter. Filtering with
    /// `Nothing` leaves the query unchanged.
    #[must_use]
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = match (self.filter, expr) {
            (current, Expr::Nothing) => current,
            (Expr::Nothing, incoming) => incoming,
            (current, incoming) => current & incoming,
        };
        self
    }

    /// Compile into the full GET text, newline separated, no trailing
    /// newline.
    #[must_use]
    pub fn compile(&self) -> String {
        let filter_lines = self.filter.render();
        let mut lines = Vec::with_capacity(2 + filter_lines.len());
        lines.push(format!("GET {}", self.table.name));

        let names: Vec<&str> = self.columns.iter().map(|column| column.name).collect();
        lines.push(format!("Columns: {}", names.join(" ")));

        lines.extend(filter_lines);
        lines.join("\n")
    }
}
