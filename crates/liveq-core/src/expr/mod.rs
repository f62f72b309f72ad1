//! Boolean expression AST over Livestatus columns.
//!
//! Pure representation of compiled filters. This layer contains no schema
//! validation: a `BinaryExpr` is only ever constructed from a resolved
//! column, either through a `Column` handle or through the filter compiler.
//! No simplification is performed; `Not(Not(x))` stays as written.

mod render;

use crate::value::Value;
use std::ops::{BitAnd, BitOr};


///
/// CompareOp
///
/// The Livestatus comparison operators. `Matches` is regex containment
/// (`~`), the `IgnoringCase` forms are the doubled variants, and every
/// operator has a `!`-prefixed negation understood natively by the wire
/// protocol.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Matches,
    MatchesIgnoringCase,
    NotMatches,
    NotMatchesIgnoringCase,
    NotLess,
    NotGreater,
    NotLessOrEqual,
    NotGreaterOrEqual,
}

impl CompareOp {
    /// All operators, in wire-symbol order.
    pub const ALL: &'static [Self] = &[
        Self::Equal,
        Self::NotEqual,
        Self::Less,
        Self::Greater,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::Matches,
        Self::MatchesIgnoringCase,
        Self::NotMatches,
        Self::NotMatchesIgnoringCase,
        Self::NotLess,
        Self::NotGreater,
        Self::NotLessOrEqual,
        Self::NotGreaterOrEqual,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Matches => "~",
            Self::MatchesIgnoringCase => "~~",
            Self::NotMatches => "!~",
            Self::NotMatchesIgnoringCase => "!~~",
            Self::NotLess => "!<",
            Self::NotGreater => "!>",
            Self::NotLessOrEqual => "!<=",
            Self::NotGreaterOrEqual => "!>=",
        }
    }

    /// Parse a wire symbol. `None` for anything outside the operator set.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// BinaryExpr
///

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl BinaryExpr {
    #[must_use]
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }
}

///
/// Expr
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Empty filter; renders no wire lines. Identity for `and`/`or`.
    Nothing,
    Compare(BinaryExpr),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl Expr {
    #[must_use]
    pub const fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs)
    }

    #[must_use]
    pub const fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs)
    }

    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    #[must_use]
    pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare(BinaryExpr::new(column, op, value))
    }

    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Equal, value)
    }

    #[must_use]
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::NotEqual, value)
    }

    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Less, value)
    }

    #[must_use]
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Greater, value)
    }

    #[must_use]
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::LessOrEqual, value)
    }

    #[must_use]
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::GreaterOrEqual, value)
    }

    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}
