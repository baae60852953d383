//! Fleet snapshot: per-device configuration records and the node filter
//! that decides which devices a query looks at.

pub mod configuration;
pub mod node_filter;

pub use configuration::{Configuration, FleetSnapshot, ServerSet};
pub use node_filter::NodeFilter;
