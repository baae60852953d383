//! Device name filtering.

use std::collections::BTreeSet;

use netconform_core::constants::DEFAULT_NODE_REGEX;
use netconform_core::errors::OutlierError;
use regex::Regex;

use super::FleetSnapshot;

/// A compiled node name filter. The pattern must match the whole device
/// name, not just a substring of it.
#[derive(Debug, Clone)]
pub struct NodeFilter {
    pattern: String,
    /// `None` admits every device.
    regex: Option<Regex>,
}

impl NodeFilter {
    /// Compile a filter. Fails with `InvalidFilter` naming the pattern.
    pub fn new(pattern: &str) -> Result<Self, OutlierError> {
        let invalid = |e: regex::Error| OutlierError::InvalidFilter {
            pattern: pattern.to_string(),
            message: e.to_string(),
        };
        // Validate the caller's pattern as written so error positions refer to it.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Some(regex),
        })
    }

    /// A filter that admits every device.
    pub fn match_all() -> Self {
        Self {
            pattern: DEFAULT_NODE_REGEX.to_string(),
            regex: None,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().map_or(true, |r| r.is_match(name))
    }

    /// The sorted set of fleet devices this filter admits.
    pub fn matching_nodes(&self, fleet: &FleetSnapshot) -> BTreeSet<String> {
        fleet
            .device_names()
            .filter(|name| self.matches(name))
            .map(String::from)
            .collect()
    }
}

impl Default for NodeFilter {
    fn default() -> Self {
        Self::match_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Configuration;

    fn fleet(names: &[&str]) -> FleetSnapshot {
        FleetSnapshot::from_configurations(names.iter().map(|n| Configuration::new(*n)))
    }

    #[test]
    fn test_full_match_semantics() {
        let filter = NodeFilter::new("core-\\d+").unwrap();
        assert!(filter.matches("core-1"));
        assert!(!filter.matches("core-1-mgmt"));
        assert!(!filter.matches("xcore-1"));
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let filter = NodeFilter::new("a|b").unwrap();
        assert!(filter.matches("a"));
        assert!(filter.matches("b"));
        assert!(!filter.matches("ab"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = NodeFilter::new("core-[").unwrap_err();
        match err {
            OutlierError::InvalidFilter { pattern, .. } => assert_eq!(pattern, "core-["),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_matching_nodes_sorted_subset() {
        let fleet = fleet(&["edge-2", "core-1", "edge-1"]);
        let nodes = NodeFilter::new("edge-.*").unwrap().matching_nodes(&fleet);
        assert_eq!(nodes.into_iter().collect::<Vec<_>>(), vec!["edge-1", "edge-2"]);
    }

    #[test]
    fn test_match_all_default() {
        let fleet = fleet(&["a", "b"]);
        assert_eq!(NodeFilter::default().matching_nodes(&fleet).len(), 2);
        assert_eq!(NodeFilter::default().pattern(), ".*");
    }
}
