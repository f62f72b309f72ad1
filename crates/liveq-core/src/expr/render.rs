//! Wire rendering of expressions into Livestatus filter lines.
//!
//! A comparison leaf renders as `Filter: <column> <op> <value>`. Boolean
//! groups render their member lines first, then the combinator with the
//! member count (`And: 2`, `Or: 3`), and negation appends `Negate: 1`.
//! `Nothing` contributes no lines anywhere; a group whose members all
//! render empty collapses away, and a single-member group renders as the
//! member alone. The count on a combinator line is therefore always the
//! number of filter groups actually emitted, never the declared arity.

use crate::expr::Expr;
use std::fmt;

impl Expr {
    /// Render into wire lines, one filter directive per element.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(&mut lines);
        lines
    }

    /// Returns the number of filter groups this expression emitted.
    fn render_into(&self, lines: &mut Vec<String>) -> usize {
        match self {
            Self::Nothing => 0,
            Self::Compare(cmp) => {
                lines.push(format!("Filter: {} {} {}", cmp.column, cmp.op, cmp.value));
                1
            }
            Self::And(members) | Self::Or(members) => {
                let keyword = match self {
                    Self::And(_) => "And",
                    _ => "Or",
                };
                let mut emitted = 0;
                for member in members {
                    if member.render_into(lines) > 0 {
                        emitted += 1;
                    }
                }
                if emitted > 1 {
                    lines.push(format!("{keyword}: {emitted}"));
                }
                usize::from(emitted > 0)
            }
            Self::Not(inner) => {
                if inner.render_into(lines) > 0 {
                    lines.push("Negate: 1".to_string());
                    1
                } else {
                    0
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => f.write_str("Nothing()"),
            Self::Compare(cmp) => {
                write!(f, "Filter({} {} {})", cmp.column, cmp.op, cmp.value)
            }
            Self::And(members) | Self::Or(members) => {
                let keyword = match self {
                    Self::And(_) => "And",
                    _ => "Or",
                };
                write!(f, "{keyword}(")?;
                for (idx, member) in members.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
            Self::Not(inner) => write!(f, "Not({inner})"),
        }
    }
}
