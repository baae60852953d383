//! NetconformErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait NetconformErrorCode {
    /// Returns the error code string (e.g., "INVALID_FILTER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_FILTER: &str = "INVALID_FILTER";
pub const EMPTY_EQUIVALENCE: &str = "EMPTY_EQUIVALENCE";
pub const UNKNOWN_HYPOTHESIS: &str = "UNKNOWN_HYPOTHESIS";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FLEET_ERROR: &str = "FLEET_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
