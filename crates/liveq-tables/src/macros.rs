//! The `table!` definition macro.
//!
//! One invocation declares a table unit struct, a typed column accessor per
//! column, and the `TableKind` model the registry serves. The wire name is
//! spelled out per column so accessors may deviate where a column name is a
//! Rust keyword (`type`, `from` and friends).

macro_rules! table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident ($table_name:literal) {
            $( $column:ident: $col_type:ident, $col_name:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        $vis struct $table;

        impl $table {
            $(
                #[doc = $desc]
                #[must_use]
                pub const fn $column() -> $crate::Column {
                    $crate::Column::new(
                        $table_name,
                        $col_name,
                        $crate::ColType::$col_type,
                    )
                }
            )+
        }

        impl $crate::TableKind for $table {
            const MODEL: &'static $crate::TableModel = &$crate::TableModel::new(
                $table_name,
                &[
                    $(
                        $crate::ColumnModel::new(
                            $col_name,
                            $crate::ColType::$col_type,
                            $desc,
                        ),
                    )+
                ],
            );
        }
    };
}

pub(crate) use table;
