//! Re-exports of the collection types used across the engine.
//!
//! Fx maps are for transient grouping only. Anything that reaches a report
//! goes through a `BTree*` collection so iteration order is stable.

pub use rustc_hash::FxHashMap;
