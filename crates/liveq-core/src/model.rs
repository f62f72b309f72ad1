//! Static table and column descriptors.
//!
//! The descriptor layer is the only schema surface the filter compiler and
//! query builder depend on. Descriptors are `'static` data built by the
//! table definitions (see `liveq-tables`); lookup is explicit name matching,
//! never reflection.

use crate::{
    expr::{BinaryExpr, CompareOp, Expr},
    value::Value,
};

///
/// ColType
///
/// Column type vocabulary of the Livestatus table headers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColType {
    Int,
    Float,
    String,
    List,
    Time,
    Dict,
    Blob,
}

///
/// ColumnModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnModel {
    /// Column name as used in filters and projections.
    pub name: &'static str,
    pub col_type: ColType,
    pub description: &'static str,
}

impl ColumnModel {
    #[must_use]
    pub const fn new(name: &'static str, col_type: ColType, description: &'static str) -> Self {
        Self {
            name,
            col_type,
            description,
        }
    }
}

///
/// TableModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TableModel {
    /// Canonical lowercase table name ("hosts", "services", ...).
    pub name: &'static str,
    /// Ordered column list (authoritative for lookup and docs).
    pub columns: &'static [ColumnModel],
}

impl TableModel {
    #[must_use]
    pub const fn new(name: &'static str, columns: &'static [ColumnModel]) -> Self {
        Self { name, columns }
    }

    /// Look up a column by its wire name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static ColumnModel> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Typed handle for a column of this table.
    #[must_use]
    pub fn column_handle(&'static self, name: &str) -> Option<Column> {
        self.column(name)
            .map(|column| Column::new(self.name, column.name, column.col_type))
    }
}

///
/// TableKind
///
/// Implemented by the generated table unit structs. The associated model is
/// the canonical-name seam: anything that accepts a table context takes
/// `&'static TableModel`, and typed callers go through `T::MODEL`.
///

pub trait TableKind {
    const MODEL: &'static TableModel;

    #[must_use]
    fn table_name() -> &'static str {
        Self::MODEL.name
    }
}

///
/// Column
///
/// Copyable handle to one column of one table. Handles are minted by the
/// table definitions, so holding one proves the (table, column) pair exists.
/// The comparison constructors build expression leaves directly.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Column {
    pub table: &'static str,
    pub name: &'static str,
    pub col_type: ColType,
}

impl Column {
    #[must_use]
    pub const fn new(table: &'static str, name: &'static str, col_type: ColType) -> Self {
        Self {
            table,
            name,
            col_type,
        }
    }

    /// Qualified `table.column` form, as accepted by the filter grammar.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// Comparison leaf with an explicit operator.
    #[must_use]
    pub fn op(&self, op: CompareOp, value: impl Into<Value>) -> Expr {
        Expr::Compare(BinaryExpr::new(self.name, op, value))
    }

    #[must_use]
    pub fn equals(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::Equal, value)
    }

    #[must_use]
    pub fn not_equals(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::NotEqual, value)
    }

    #[must_use]
    pub fn less(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::Less, value)
    }

    #[must_use]
    pub fn greater(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::Greater, value)
    }

    #[must_use]
    pub fn less_or_equal(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::LessOrEqual, value)
    }

    #[must_use]
    pub fn greater_or_equal(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::GreaterOrEqual, value)
    }

    /// Regex match (`~`).
    #[must_use]
    pub fn matches(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::Matches, value)
    }

    /// Case-insensitive regex match (`~~`).
    #[must_use]
    pub fn matches_ignoring_case(&self, value: impl Into<Value>) -> Expr {
        self.op(CompareOp::MatchesIgnoringCase, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::hosts;

    #[test]
    fn column_lookup_is_exact() {
        let table = hosts();
        assert_eq!(table.column("name").unwrap().col_type, ColType::String);
        assert!(table.column("Name").is_none());
        assert!(table.column("bogus").is_none());
    }

    #[test]
    fn handles_carry_table_and_type() {
        let handle = hosts().column_handle("state").unwrap();
        assert_eq!(handle.table, "hosts");
        assert_eq!(handle.col_type, ColType::Int);
        assert_eq!(handle.full_name(), "hosts.state");
    }

    #[test]
    fn comparison_constructors_build_leaves() {
        let name = hosts().column_handle("name").unwrap();
        assert_eq!(
            name.equals("example.com"),
            Expr::eq("name", "example.com"),
        );
        assert_eq!(
            name.matches("^example"),
            Expr::Compare(BinaryExpr::new("name", CompareOp::Matches, "^example")),
        );
    }
}
