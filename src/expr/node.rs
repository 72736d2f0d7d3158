//! Expression tree nodes with boolean combinators.
use std::ops::{BitAnd, BitOr, Not};

use super::TemporalRelation;
use crate::interval_var::TimePoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node of a scheduling expression tree.
///
/// - **Constant** / **TimePoint**: integer-valued leaves
/// - **Relation**: a [`TemporalRelation`] over two integer-valued children
/// - **Not** / **And** / **Or**: logical combinators over boolean children
///
/// Ownership flows strictly from parent to child; nodes hold no back-references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Expr {
    Constant(i64),
    TimePoint(TimePoint),
    Relation(TemporalRelation),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub const fn constant(value: i64) -> Self {
        Expr::Constant(value)
    }

    /// Creates a conjunction node (AND logic).
    pub fn and(children: Vec<Expr>) -> Self {
        Expr::And(children)
    }

    /// Creates a disjunction node (OR logic).
    pub fn or(children: Vec<Expr>) -> Self {
        Expr::Or(children)
    }

    /// Returns whether this node evaluates to a boolean and can therefore be
    /// combined with `!`, `&` and `|`.
    pub const fn is_boolean(&self) -> bool {
        matches!(
            self,
            Expr::Relation(_) | Expr::Not(_) | Expr::And(_) | Expr::Or(_)
        )
    }

    pub fn as_relation(&self) -> Option<&TemporalRelation> {
        match self {
            Expr::Relation(rel) => Some(rel),
            _ => None,
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(i64::from(value))
    }
}

impl From<TimePoint> for Expr {
    fn from(point: TimePoint) -> Self {
        Expr::TimePoint(point)
    }
}

impl From<&TimePoint> for Expr {
    fn from(point: &TimePoint) -> Self {
        Expr::TimePoint(point.clone())
    }
}

impl From<TemporalRelation> for Expr {
    fn from(relation: TemporalRelation) -> Self {
        Expr::Relation(relation)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl<R: Into<Expr>> BitAnd<R> for Expr {
    type Output = Expr;

    /// Appends to an existing conjunction instead of nesting it.
    fn bitand(self, rhs: R) -> Expr {
        match self {
            Expr::And(mut children) => {
                children.push(rhs.into());
                Expr::And(children)
            }
            other => Expr::And(vec![other, rhs.into()]),
        }
    }
}

impl<R: Into<Expr>> BitOr<R> for Expr {
    type Output = Expr;

    /// Appends to an existing disjunction instead of nesting it.
    fn bitor(self, rhs: R) -> Expr {
        match self {
            Expr::Or(mut children) => {
                children.push(rhs.into());
                Expr::Or(children)
            }
            other => Expr::Or(vec![other, rhs.into()]),
        }
    }
}

impl Not for TemporalRelation {
    type Output = Expr;

    fn not(self) -> Expr {
        !Expr::from(self)
    }
}

impl<R: Into<Expr>> BitAnd<R> for TemporalRelation {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        Expr::from(self) & rhs
    }
}

impl<R: Into<Expr>> BitOr<R> for TemporalRelation {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        Expr::from(self) | rhs
    }
}
