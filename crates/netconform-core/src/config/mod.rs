//! Configuration system for netconform.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod netconform_config;
pub mod outliers_config;
pub mod report_config;

pub use netconform_config::{CliOverrides, NetconformConfig};
pub use outliers_config::OutliersConfig;
pub use report_config::ReportConfig;
