//! Read-only table registry.
//!
//! The registry is plain `'static` data: an ordered set of table models.
//! It is built once by the table-definition crate and consumed by the
//! filter compiler; lookups are exact name matches returning `Option`.

use crate::model::{ColumnModel, TableModel};

///
/// TableRegistry
///

#[derive(Clone, Copy, Debug)]
pub struct TableRegistry {
    tables: &'static [&'static TableModel],
}

impl TableRegistry {
    #[must_use]
    pub const fn new(tables: &'static [&'static TableModel]) -> Self {
        Self { tables }
    }

    #[must_use]
    pub const fn tables(&self) -> &'static [&'static TableModel] {
        self.tables
    }

    /// Look up a table by its canonical lowercase name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&'static TableModel> {
        self.tables.iter().copied().find(|table| table.name == name)
    }

    /// Resolve a `(table, column)` pair. `None` covers both an unknown
    /// table and an unknown column on a known table.
    #[must_use]
    pub fn resolve(&self, table: &str, column: &str) -> Option<&'static ColumnModel> {
        self.table(table)?.column(column)
    }
}
