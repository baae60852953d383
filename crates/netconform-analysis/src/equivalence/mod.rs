//! Equivalence classes of devices over named structures.
//!
//! The classes themselves come from an `EquivalenceSource`. The engine only
//! consumes them; `SameNameBuilder` is the reference source that compares
//! same-named structures for exact equality.

pub mod source;
pub mod types;

pub use source::{EquivalenceSource, SameNameBuilder};
pub use types::{EquivalenceClass, NamedStructureEquivalenceSets};
