//! Outlier query configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HYPOTHESIS, DEFAULT_NODE_REGEX};

/// Configuration for the outliers query.
///
/// The hypothesis is kept as a string here; it is checked against the
/// closed set of hypotheses when a query is built from this config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutliersConfig {
    /// Hypothesis name: `sameDefinition`, `sameName`, or `sameServers`.
    pub hypothesis: Option<String>,
    /// Regular expression over device names. Default: `.*`.
    pub node_regex: Option<String>,
    /// Structure types to analyze. Empty means all.
    #[serde(default)]
    pub named_struct_types: Vec<String>,
}

impl OutliersConfig {
    /// Returns the effective hypothesis name, defaulting to `sameDefinition`.
    pub fn effective_hypothesis(&self) -> &str {
        self.hypothesis.as_deref().unwrap_or(DEFAULT_HYPOTHESIS)
    }

    /// Returns the effective node regex, defaulting to `.*`.
    pub fn effective_node_regex(&self) -> &str {
        self.node_regex.as_deref().unwrap_or(DEFAULT_NODE_REGEX)
    }
}
