use std::fmt::Display;

use crate::expr::{Expr, TemporalRelation};
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which end of an interval variable a [`TimePoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimePointKind {
    Start,
    End,
}

impl TimePointKind {
    /// Attribute name used when rendering, e.g. `start_time`.
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Start => "start_time",
            Self::End => "end_time",
        }
    }
}

/// The start or end instant of an interval variable.
///
/// Identity is `(interval, kind)`; `label` is only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimePoint {
    interval: Id,
    label: String,
    kind: TimePointKind,
}

impl TimePoint {
    pub fn new(interval: impl Into<Id>, label: impl Into<String>, kind: TimePointKind) -> Self {
        Self {
            interval: interval.into(),
            label: label.into(),
            kind,
        }
    }

    /// Id of the owning interval variable.
    pub fn interval(&self) -> &str {
        &self.interval
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn kind(&self) -> TimePointKind {
        self.kind
    }

    /// Renders this point using `name` in place of the variable label.
    pub fn render_as(&self, name: &str) -> String {
        format!("{}.{}", name, self.kind.attribute())
    }

    /// `self + delay <= other`
    pub fn before(&self, other: impl Into<Expr>, delay: i64) -> TemporalRelation {
        TemporalRelation::precedence(self.clone(), other, delay)
    }

    /// `other + delay <= self`
    pub fn after(&self, other: impl Into<Expr>, delay: i64) -> TemporalRelation {
        TemporalRelation::precedence(other, self.clone(), delay)
    }

    /// `self + delay == other`
    pub fn at(&self, other: impl Into<Expr>, delay: i64) -> TemporalRelation {
        TemporalRelation::synchronization(self.clone(), other, delay)
    }
}

impl Display for TimePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.label, self.kind.attribute())
    }
}
