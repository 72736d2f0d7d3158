//! Temporal relation nodes between two time points.
//!
//! # Variants
//!
//! | Kind              | Asserts                       | Rendered as              |
//! |-------------------|-------------------------------|--------------------------|
//! | `Precedence`      | `first + delay <= second`     | `first + delay <= second`|
//! | `Synchronization` | `first + delay == second`     | `first + delay == second`|
//!
//! Both hooks work on children that the tree walker has already resolved;
//! a relation never recurses into its own arguments.

use std::cmp::Ordering;
use std::fmt::Display;

use super::Expr;
use crate::error::ExprError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Comparison encoded by a [`TemporalRelation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    /// `first` comes before `second` by at least `delay` periods.
    Precedence,

    /// `first` shifted by `delay` coincides with `second`.
    Synchronization,
}

impl RelationKind {
    /// Operator token used when rendering.
    pub const fn operator(&self) -> &'static str {
        match self {
            Self::Precedence => "<=",
            Self::Synchronization => "==",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Precedence => "Precedence",
            Self::Synchronization => "Synchronization",
        }
    }

    /// Applies the comparison to an already offset left-hand side.
    pub const fn holds(&self, lhs: i128, rhs: i128) -> bool {
        match self {
            Self::Precedence => lhs <= rhs,
            Self::Synchronization => lhs == rhs,
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Binary temporal relation with a fixed integer delay.
///
/// Always holds exactly two children: `first` is the base point, `second`
/// the target point. Nodes are immutable once built; [`with_args`] returns a
/// new node rather than editing children in place.
///
/// [`with_args`]: TemporalRelation::with_args
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemporalRelation {
    Precedence { args: Box<[Expr; 2]>, delay: i64 },
    Synchronization { args: Box<[Expr; 2]>, delay: i64 },
}

impl TemporalRelation {
    pub fn new(
        kind: RelationKind,
        first: impl Into<Expr>,
        second: impl Into<Expr>,
        delay: i64,
    ) -> Self {
        Self::from_array(kind, [first.into(), second.into()], delay)
    }

    /// `first + delay <= second`
    pub fn precedence(first: impl Into<Expr>, second: impl Into<Expr>, delay: i64) -> Self {
        Self::new(RelationKind::Precedence, first, second, delay)
    }

    /// `first + delay == second`
    pub fn synchronization(first: impl Into<Expr>, second: impl Into<Expr>, delay: i64) -> Self {
        Self::new(RelationKind::Synchronization, first, second, delay)
    }

    /// Builds a relation from a dynamically sized argument list.
    ///
    /// Returns [`ExprError::ArityMismatch`] unless exactly two arguments are given.
    pub fn try_from_args(
        kind: RelationKind,
        args: Vec<Expr>,
        delay: i64,
    ) -> Result<Self, ExprError> {
        let args: [Expr; 2] = args.try_into().map_err(|rejected: Vec<Expr>| {
            ExprError::ArityMismatch {
                expected: Self::ARITY,
                found: rejected.len(),
            }
        })?;
        Ok(Self::from_array(kind, args, delay))
    }

    fn from_array(kind: RelationKind, args: [Expr; 2], delay: i64) -> Self {
        let args = Box::new(args);
        match kind {
            RelationKind::Precedence => Self::Precedence { args, delay },
            RelationKind::Synchronization => Self::Synchronization { args, delay },
        }
    }

    /// Returns a node of the same kind and delay over new children.
    pub fn with_args(&self, args: [Expr; 2]) -> Self {
        Self::from_array(self.kind(), args, self.delay())
    }

    /// Number of children of every relation node.
    pub const ARITY: usize = 2;

    pub const fn nargs(&self) -> usize {
        Self::ARITY
    }

    pub const fn kind(&self) -> RelationKind {
        match self {
            Self::Precedence { .. } => RelationKind::Precedence,
            Self::Synchronization { .. } => RelationKind::Synchronization,
        }
    }

    pub const fn delay(&self) -> i64 {
        match self {
            Self::Precedence { delay, .. } | Self::Synchronization { delay, .. } => *delay,
        }
    }

    pub fn args(&self) -> &[Expr; 2] {
        match self {
            Self::Precedence { args, .. } | Self::Synchronization { args, .. } => &**args,
        }
    }

    pub fn first(&self) -> &Expr {
        &self.args()[0]
    }

    pub fn second(&self) -> &Expr {
        &self.args()[1]
    }

    /// Consumes the node, returning its children in order.
    pub fn into_args(self) -> [Expr; 2] {
        match self {
            Self::Precedence { args, .. } | Self::Synchronization { args, .. } => *args,
        }
    }

    /// Evaluates the relation over already-resolved child values.
    ///
    /// The offset is applied in `i128` so extreme delays cannot overflow.
    pub fn apply_operation(&self, values: [i64; 2]) -> bool {
        let [first, second] = values;
        let lhs = i128::from(first) + i128::from(self.delay());
        self.kind().holds(lhs, i128::from(second))
    }

    /// Renders the relation over already-rendered child strings.
    ///
    /// A zero delay drops the offset term; a negative delay is written as a
    /// subtraction of its absolute value.
    pub fn to_string_with(&self, values: [&str; 2]) -> String {
        let [first, second] = values;
        let delay = self.delay();
        let lhs = match delay.cmp(&0) {
            Ordering::Equal => first.to_string(),
            Ordering::Greater => format!("{first} + {delay}"),
            Ordering::Less => format!("{first} - {}", delay.unsigned_abs()),
        };
        format!("{lhs} {} {second}", self.kind().operator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prec(delay: i64) -> TemporalRelation {
        TemporalRelation::precedence(0, 0, delay)
    }

    fn sync(delay: i64) -> TemporalRelation {
        TemporalRelation::synchronization(0, 0, delay)
    }

    // ── apply_operation ───────────────────────────────────────────────

    #[test]
    fn precedence_apply_operation() {
        assert!(prec(0).apply_operation([3, 3]));
        assert!(prec(0).apply_operation([3, 4]));
        assert!(!prec(0).apply_operation([4, 3]));
        assert!(prec(2).apply_operation([3, 5]));
        assert!(!prec(2).apply_operation([3, 4]));
        assert!(prec(-2).apply_operation([5, 3]));
        assert!(!prec(-2).apply_operation([6, 3]));
    }

    #[test]
    fn synchronization_apply_operation() {
        assert!(sync(0).apply_operation([5, 5]));
        assert!(!sync(0).apply_operation([5, 6]));
        assert!(sync(-4).apply_operation([10, 6]));
        assert!(sync(3).apply_operation([1, 4]));
        assert!(!sync(3).apply_operation([1, 5]));
    }

    #[test]
    fn apply_operation_does_not_overflow() {
        assert!(!prec(i64::MAX).apply_operation([i64::MAX, i64::MAX]));
        assert!(prec(i64::MIN).apply_operation([i64::MIN, i64::MIN]));
        assert!(sync(i64::MIN).apply_operation([i64::MAX, -1]));
    }

    // ── to_string_with ────────────────────────────────────────────────

    #[test]
    fn precedence_rendering_branches() {
        assert_eq!(prec(0).to_string_with(["x", "y"]), "x <= y");
        assert_eq!(prec(3).to_string_with(["x", "y"]), "x + 3 <= y");
        assert_eq!(prec(-2).to_string_with(["x", "y"]), "x - 2 <= y");
    }

    #[test]
    fn synchronization_rendering_branches() {
        assert_eq!(sync(0).to_string_with(["x", "y"]), "x == y");
        assert_eq!(sync(7).to_string_with(["x", "y"]), "x + 7 == y");
        assert_eq!(sync(-4).to_string_with(["x", "y"]), "x - 4 == y");
    }

    #[test]
    fn rendering_most_negative_delay() {
        assert_eq!(
            prec(i64::MIN).to_string_with(["a", "b"]),
            "a - 9223372036854775808 <= b"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let rel = sync(-9);
        let first = rel.to_string_with(["p", "q"]);
        let second = rel.to_string_with(["p", "q"]);
        assert_eq!(first, second);
    }

    // ── construction ──────────────────────────────────────────────────

    #[test]
    fn accessors_return_constructor_values() {
        let rel = TemporalRelation::precedence(1, 2, -5);
        assert_eq!(rel.kind(), RelationKind::Precedence);
        assert_eq!(rel.delay(), -5);
        assert_eq!(rel.nargs(), 2);
        assert_eq!(rel.first(), &Expr::Constant(1));
        assert_eq!(rel.second(), &Expr::Constant(2));
        assert_eq!(rel.clone().into_args(), [Expr::Constant(1), Expr::Constant(2)]);
    }

    #[test]
    fn try_from_args_accepts_two() {
        let rel = TemporalRelation::try_from_args(
            RelationKind::Synchronization,
            vec![Expr::Constant(4), Expr::Constant(9)],
            5,
        )
        .unwrap();
        assert_eq!(rel, TemporalRelation::synchronization(4, 9, 5));
    }

    #[test]
    fn try_from_args_rejects_other_arity() {
        for n in [0, 1, 3] {
            let args = (0..n).map(Expr::Constant).collect();
            let err =
                TemporalRelation::try_from_args(RelationKind::Precedence, args, 0).unwrap_err();
            assert_eq!(
                err,
                ExprError::ArityMismatch {
                    expected: 2,
                    found: n as usize
                }
            );
        }
    }

    #[test]
    fn with_args_preserves_kind_and_delay() {
        let rel = TemporalRelation::synchronization(1, 2, -3);
        let swapped = rel.with_args([Expr::Constant(2), Expr::Constant(1)]);

        assert_eq!(swapped.kind(), RelationKind::Synchronization);
        assert_eq!(swapped.delay(), -3);
        assert_eq!(swapped.first(), &Expr::Constant(2));
        // original is untouched
        assert_eq!(rel.first(), &Expr::Constant(1));
    }

    #[test]
    fn kind_operator_and_display() {
        assert_eq!(RelationKind::Precedence.operator(), "<=");
        assert_eq!(RelationKind::Synchronization.operator(), "==");
        assert_eq!(format!("{}", RelationKind::Precedence), "Precedence");
        assert_eq!(
            format!("{}", RelationKind::Synchronization),
            "Synchronization"
        );
    }
}
