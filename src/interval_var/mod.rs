//! Interval variables and the time points that temporal relations compare.
//!
//! An [`IntervalVar`] stands for a scheduled activity. Its start and end are
//! exposed as [`TimePoint`]s, which are the usual children of a
//! [`TemporalRelation`](crate::expr::TemporalRelation):
//!
//! ```
//! use virolai_temporal::IntervalVar;
//!
//! let setup = IntervalVar::new("setup");
//! let run = IntervalVar::new("run");
//!
//! // run may start no earlier than 5 periods after setup ends
//! let rel = setup.end_time().before(&run.start_time(), 5);
//! assert_eq!(rel.to_string(), "setup.end_time + 5 <= run.start_time");
//! ```

mod time_point;
mod var;

pub use time_point::{TimePoint, TimePointKind};
pub use var::IntervalVar;
