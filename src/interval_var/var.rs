use super::{TimePoint, TimePointKind};
use crate::{generate_id, Id};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named scheduling activity whose start and end are integer time points.
///
/// The variable carries identity only. Values for its time points live in a
/// [`TimeAssignment`](crate::expr::TimeAssignment).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalVar {
    id: Id,
    name: String,
}

impl IntervalVar {
    /// Creates a variable with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name)
    }

    pub fn with_id(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> TimePoint {
        TimePoint::new(self.id.clone(), self.name.clone(), TimePointKind::Start)
    }

    pub fn end_time(&self) -> TimePoint {
        TimePoint::new(self.id.clone(), self.name.clone(), TimePointKind::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_distinct_ids() {
        let a = IntervalVar::new("a");
        let b = IntervalVar::new("a");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn time_points_share_the_variable_id() {
        let x = IntervalVar::with_id("iv-1", "x");
        let start = x.start_time();
        let end = x.end_time();

        assert_eq!(start.interval(), "iv-1");
        assert_eq!(end.interval(), "iv-1");
        assert_eq!(start.kind(), TimePointKind::Start);
        assert_eq!(end.kind(), TimePointKind::End);
        assert_ne!(start, end);
    }
}
