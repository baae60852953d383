//! Shared data types.

pub mod collections;
pub mod ratio;

pub use collections::FxHashMap;
pub use ratio::Ratio;
