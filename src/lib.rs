//! virolai-temporal - temporal precedence expressions for scheduling models
//!
//! Expression-tree nodes stating that one scheduling time point comes before
//! another by at least a delay ([`RelationKind::Precedence`]) or coincides
//! with it up to a fixed offset ([`RelationKind::Synchronization`]), together
//! with the small tree framework that evaluates and renders them.

pub mod error;
pub mod expr;
pub mod interval_var;

pub use error::ExprError;
pub use expr::{
    Expr, RelationKind, RenderOptions, SymbolMap, TemporalRelation, TimeAssignment, Value,
};
pub use interval_var::{IntervalVar, TimePoint, TimePointKind};

/// Identifier type used for interval variables.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
