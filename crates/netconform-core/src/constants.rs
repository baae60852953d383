//! Shared constants for the netconform engine.

use crate::types::Ratio;

/// Only report outliers that make up this fraction or less of the
/// devices that took part in a comparison.
pub const OUTLIERS_THRESHOLD: Ratio = Ratio::new(1, 3);

/// Default node name filter: every device.
pub const DEFAULT_NODE_REGEX: &str = ".*";

/// Default hypothesis name.
pub const DEFAULT_HYPOTHESIS: &str = "sameDefinition";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "netconform.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "NETCONFORM_LOG";
