//! Tree analysis operations: arity, depth, node counts, and traversal.

use super::{Expr, TemporalRelation};
use crate::interval_var::TimePoint;

impl Expr {
    /// Number of direct children.
    pub fn nargs(&self) -> usize {
        self.args().len()
    }

    /// Direct children in order. Leaves have none.
    pub fn args(&self) -> &[Expr] {
        match self {
            Expr::Constant(_) | Expr::TimePoint(_) => &[],
            Expr::Relation(relation) => relation.args().as_slice(),
            Expr::Not(child) => std::slice::from_ref(child.as_ref()),
            Expr::And(children) | Expr::Or(children) => children,
        }
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::TimePoint(_))
    }

    /// Returns the depth of this tree.
    ///
    /// - Leaf nodes have depth 1
    /// - Interior nodes have depth = 1 + max(child depths)
    pub fn depth(&self) -> usize {
        1 + self.args().iter().map(Expr::depth).max().unwrap_or(0)
    }

    /// Returns the total number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        1 + self.args().iter().map(Expr::node_count).sum::<usize>()
    }

    /// Visits all nodes in the tree in pre-order (depth-first).
    pub fn visit_preorder<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Expr),
    {
        visitor(self);
        for child in self.args() {
            child.visit_preorder(visitor);
        }
    }

    /// All relation nodes, in pre-order.
    pub fn relations(&self) -> Vec<&TemporalRelation> {
        let mut found = Vec::new();
        self.visit_preorder(&mut |node| {
            if let Expr::Relation(relation) = node {
                found.push(relation);
            }
        });
        found
    }

    /// All time point leaves, in pre-order. Repeated points appear repeatedly.
    pub fn time_points(&self) -> Vec<&TimePoint> {
        let mut found = Vec::new();
        self.visit_preorder(&mut |node| {
            if let Expr::TimePoint(point) = node {
                found.push(point);
            }
        });
        found
    }
}
