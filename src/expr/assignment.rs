//! Integer values for time points, used as the evaluation environment.

use std::collections::HashMap;

use crate::interval_var::{IntervalVar, TimePoint, TimePointKind};
use crate::Id;

/// Maps time points to integer instants.
///
/// Keyed by `(interval id, kind)` so a point's display label does not
/// affect lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeAssignment {
    values: HashMap<(Id, TimePointKind), i64>,
}

impl TimeAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `point`, returning the previous value if any.
    pub fn set(&mut self, point: &TimePoint, value: i64) -> Option<i64> {
        self.values
            .insert((point.interval().to_owned(), point.kind()), value)
    }

    pub fn get(&self, point: &TimePoint) -> Option<i64> {
        self.values
            .get(&(point.interval().to_owned(), point.kind()))
            .copied()
    }

    /// Assigns both ends of an interval variable.
    pub fn assign(&mut self, var: &IntervalVar, start: i64, end: i64) {
        self.set(&var.start_time(), start);
        self.set(&var.end_time(), end);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
