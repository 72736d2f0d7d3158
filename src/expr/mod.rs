//! Scheduling expression trees.
//!
//! [`Expr`] is the tree; [`TemporalRelation`] is the node kind that compares
//! two integer time points. Evaluation and rendering walk the tree bottom-up
//! and call each node's hook with its children already resolved.

mod assignment;
mod evaluate;
mod node;
mod relation;
mod render;
mod tree;
mod value;


pub use assignment::TimeAssignment;
pub use node::Expr;
pub use relation::{RelationKind, TemporalRelation};
pub use render::{RenderOptions, SymbolMap};
pub use value::Value;
