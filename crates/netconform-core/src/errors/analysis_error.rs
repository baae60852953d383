//! Top-level error for end-to-end runs.

use super::error_code::{self, NetconformErrorCode};
use super::{ConfigError, FleetError, OutlierError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("Outlier error: {0}")]
    Outlier(#[from] OutlierError),

    #[error("Report error: {0}")]
    Report(String),
}

impl NetconformErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Fleet(e) => e.error_code(),
            Self::Outlier(e) => e.error_code(),
            Self::Report(_) => error_code::REPORT_ERROR,
        }
    }
}
