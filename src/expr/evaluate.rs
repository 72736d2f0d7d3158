//! Bottom-up evaluation of expression trees.
//!
//! The walker resolves every child first, checks operand types, and only then
//! hands the resolved values to the node's own operation. Relation nodes
//! therefore never see unresolved children or non-integer operands.

use tracing::{debug, trace};

use super::{Expr, TemporalRelation, TimeAssignment, Value};
use crate::error::ExprError;

impl Expr {
    /// Evaluates this tree against `assignment`.
    ///
    /// # Errors
    ///
    /// - [`ExprError::UnassignedTimePoint`] if a time point has no value
    /// - [`ExprError::TypeMismatch`] if a node receives an operand of the wrong type
    pub fn evaluate(&self, assignment: &TimeAssignment) -> Result<Value, ExprError> {
        let result = self.evaluate_node(assignment);
        if let Err(err) = &result {
            debug!(error = %err, "expression evaluation failed");
        }
        result
    }

    /// Evaluates a boolean-valued tree.
    pub fn is_satisfied(&self, assignment: &TimeAssignment) -> Result<bool, ExprError> {
        expect_bool("expression", self.evaluate(assignment)?)
    }

    fn evaluate_node(&self, assignment: &TimeAssignment) -> Result<Value, ExprError> {
        match self {
            Expr::Constant(value) => Ok(Value::Int(*value)),
            Expr::TimePoint(point) => assignment
                .get(point)
                .map(Value::Int)
                .ok_or_else(|| ExprError::UnassignedTimePoint(point.to_string())),
            Expr::Relation(relation) => relation.evaluate_node(assignment).map(Value::Bool),
            Expr::Not(child) => Ok(Value::Bool(!expect_bool(
                "Not",
                child.evaluate_node(assignment)?,
            )?)),
            Expr::And(children) => {
                let values = resolve_bools("And", children, assignment)?;
                Ok(Value::Bool(values.into_iter().all(|v| v)))
            }
            Expr::Or(children) => {
                let values = resolve_bools("Or", children, assignment)?;
                Ok(Value::Bool(values.into_iter().any(|v| v)))
            }
        }
    }
}

impl TemporalRelation {
    fn evaluate_node(&self, assignment: &TimeAssignment) -> Result<bool, ExprError> {
        let node = self.kind().name();
        let [first, second] = self.args();
        let values = [
            expect_int(node, first.evaluate_node(assignment)?)?,
            expect_int(node, second.evaluate_node(assignment)?)?,
        ];

        let result = self.apply_operation(values);
        trace!(
            kind = %self.kind(),
            first = values[0],
            second = values[1],
            delay = self.delay(),
            result,
            "evaluated temporal relation"
        );
        Ok(result)
    }
}

fn resolve_bools(
    node: &'static str,
    children: &[Expr],
    assignment: &TimeAssignment,
) -> Result<Vec<bool>, ExprError> {
    children
        .iter()
        .map(|child| expect_bool(node, child.evaluate_node(assignment)?))
        .collect()
}

fn expect_int(node: &'static str, value: Value) -> Result<i64, ExprError> {
    value.as_int().ok_or(ExprError::TypeMismatch {
        node,
        expected: "integer",
        found: value.type_name(),
    })
}

fn expect_bool(node: &'static str, value: Value) -> Result<bool, ExprError> {
    value.as_bool().ok_or(ExprError::TypeMismatch {
        node,
        expected: "boolean",
        found: value.type_name(),
    })
}
