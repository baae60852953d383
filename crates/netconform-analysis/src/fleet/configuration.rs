//! Vendor-independent device configuration and the fleet that holds it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use netconform_core::errors::FleetError;
use netconform_core::tracing::metrics;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set of server addresses. Sorted, so two devices listing the same
/// servers in a different order compare equal.
pub type ServerSet = BTreeSet<String>;

/// One device's parsed configuration. Read-only once it is in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub hostname: String,
    /// Structure type → structure name → structure definition.
    pub named_structures: BTreeMap<String, BTreeMap<String, Value>>,
    pub dns_servers: ServerSet,
    pub logging_servers: ServerSet,
    pub ntp_servers: ServerSet,
    pub snmp_trap_servers: ServerSet,
    pub tacacs_servers: ServerSet,
}

impl Configuration {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// Builder-style insert of a named structure.
    pub fn with_structure(
        mut self,
        struct_type: impl Into<String>,
        name: impl Into<String>,
        definition: Value,
    ) -> Self {
        self.named_structures
            .entry(struct_type.into())
            .or_default()
            .insert(name.into(), definition);
        self
    }

    /// Structures of one type, keyed by name.
    pub fn structures_of(&self, struct_type: &str) -> Option<&BTreeMap<String, Value>> {
        self.named_structures.get(struct_type)
    }

    pub fn structure(&self, struct_type: &str, name: &str) -> Option<&Value> {
        self.structures_of(struct_type)?.get(name)
    }

    pub fn structure_types(&self) -> impl Iterator<Item = &str> {
        self.named_structures.keys().map(String::as_str)
    }
}

/// Device name → configuration for one point-in-time snapshot of a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    devices: BTreeMap<String, Configuration>,
}

impl FleetSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot keyed by each configuration's hostname. A later
    /// configuration with the same hostname replaces an earlier one.
    pub fn from_configurations(configs: impl IntoIterator<Item = Configuration>) -> Self {
        let mut fleet = Self::new();
        for config in configs {
            fleet.insert(config);
        }
        fleet
    }

    /// Insert a configuration keyed by its hostname, returning any previous one.
    pub fn insert(&mut self, config: Configuration) -> Option<Configuration> {
        self.devices.insert(config.hostname.clone(), config)
    }

    pub fn get(&self, name: &str) -> Option<&Configuration> {
        self.devices.get(name)
    }

    /// Device names in sorted order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Parse a snapshot from JSON of the form `{"devices": {name: config}}`.
    ///
    /// A configuration with an empty hostname takes its key as hostname; a
    /// non-empty hostname that disagrees with its key is rejected.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, FleetError> {
        let mut fleet: FleetSnapshot =
            serde_json::from_str(json).map_err(|e| FleetError::Malformed {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        for (name, config) in fleet.devices.iter_mut() {
            if config.hostname.is_empty() {
                config.hostname = name.clone();
            } else if config.hostname != *name {
                return Err(FleetError::HostnameMismatch {
                    name: name.clone(),
                    hostname: config.hostname.clone(),
                });
            }
        }

        tracing::debug!(
            { metrics::SNAPSHOT_ORIGIN } = origin,
            { metrics::DEVICES } = fleet.len(),
            "loaded fleet snapshot"
        );
        Ok(fleet)
    }

    /// Read and parse a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let content = std::fs::read_to_string(path).map_err(|source| FleetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_order_does_not_matter() {
        let mut a = Configuration::new("a");
        a.ntp_servers = ["10.0.0.2", "10.0.0.1"].iter().map(|s| s.to_string()).collect();
        let mut b = Configuration::new("b");
        b.ntp_servers = ["10.0.0.1", "10.0.0.2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(a.ntp_servers, b.ntp_servers);
    }

    #[test]
    fn test_from_json_fills_hostname() {
        let fleet = FleetSnapshot::from_json_str(
            r#"{"devices": {"r1": {"ntp_servers": ["10.0.0.1"]}, "r2": {}}}"#,
            "<test>",
        )
        .unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.get("r1").unwrap().hostname, "r1");
        assert!(fleet.get("r2").unwrap().ntp_servers.is_empty());
    }

    #[test]
    fn test_from_json_hostname_mismatch() {
        let err = FleetSnapshot::from_json_str(
            r#"{"devices": {"r1": {"hostname": "r9"}}}"#,
            "<test>",
        )
        .unwrap_err();
        assert!(matches!(err, FleetError::HostnameMismatch { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = FleetSnapshot::from_json_str("{\"devices\": [1, 2]}", "fleet.json").unwrap_err();
        match err {
            FleetError::Malformed { path, .. } => assert_eq!(path, "fleet.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FleetSnapshot::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FleetError::Io { .. }));
    }

    #[test]
    fn test_structure_lookup() {
        let config = Configuration::new("r1").with_structure(
            "IpAccessList",
            "acl1",
            json!({"lines": ["permit ip any any"]}),
        );
        assert!(config.structure("IpAccessList", "acl1").is_some());
        assert!(config.structure("IpAccessList", "acl2").is_none());
        assert!(config.structure("RoutingPolicy", "acl1").is_none());
        assert_eq!(config.structure_types().collect::<Vec<_>>(), vec!["IpAccessList"]);
    }
}
