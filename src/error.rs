use thiserror::Error;

/// Errors raised while building or walking a temporal expression tree.
///
/// Relation nodes never produce these themselves: arity is checked where a
/// node is built from a dynamic argument list, and operand types are checked
/// by the tree walker before a node's hook runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("Time point has no assigned value: {0}")]
    UnassignedTimePoint(String),

    #[error("Type mismatch in {node}: expected {expected}, found {found}")]
    TypeMismatch {
        node: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Wrong number of arguments: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}
