//! Error handling for netconform.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod fleet_error;
pub mod outlier_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::NetconformErrorCode;
pub use fleet_error::FleetError;
pub use outlier_error::OutlierError;
