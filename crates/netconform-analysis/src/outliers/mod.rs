//! Outlier detection by majority vote.
//!
//! Devices are partitioned into equivalence classes for a subject (a named
//! structure or a fleet-wide property). The largest class is taken to be
//! correct; everyone else is an outlier. A split is only reported when the
//! outliers are a small enough share of the devices compared, so evenly
//! split fleets read as legitimate variation rather than mistakes.
//!
//! Pipeline: equivalence source → hypothesis transform → ranking →
//! threshold filter → sorted `OutliersAnswer`. Server properties skip the
//! source and partition devices directly.

pub mod engine;
pub mod hypothesis;
pub mod properties;
pub mod ranking;
pub mod types;

pub use engine::{OutlierEngine, OutliersQuery};
pub use hypothesis::{to_name_only, Hypothesis};
pub use properties::{PropertyDefinition, SERVER_PROPERTIES};
pub use ranking::{rank, Ranked};
pub use types::{NamedStructureOutlierSet, OutlierSet, OutliersAnswer};
