//! netconform-core: shared foundation for the netconform outlier engine.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Config: TOML-based, layered resolution (CLI > env > project > user > defaults)
//! - Tracing: `tracing` + `EnvFilter` driven by `NETCONFORM_LOG`
//! - Constants: defaults and the outlier significance threshold
//! - Types: collection re-exports and the exact `Ratio` used for thresholds

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
