//! netconform-analysis: fleet-wide configuration outlier detection.
//!
//! - Fleet: per-device configuration snapshot and node filtering
//! - Equivalence: same-name equivalence classes and the source seam
//! - Outliers: hypotheses, majority ranking, property scanning, the engine
//! - Report: deterministic text and JSON rendering

pub mod equivalence;
pub mod fleet;
pub mod outliers;
pub mod report;

pub use equivalence::{EquivalenceSource, SameNameBuilder};
pub use fleet::{Configuration, FleetSnapshot, NodeFilter};
pub use outliers::engine::run;
pub use outliers::{Hypothesis, OutlierEngine, OutliersAnswer, OutliersQuery};
