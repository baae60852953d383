//! Fleet snapshot errors.

use super::error_code::{self, NetconformErrorCode};

/// Errors that can occur while loading a fleet snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("Failed to read fleet snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fleet snapshot {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Device {name} appears under a different hostname {hostname}")]
    HostnameMismatch { name: String, hostname: String },
}

impl NetconformErrorCode for FleetError {
    fn error_code(&self) -> &'static str {
        error_code::FLEET_ERROR
    }
}
