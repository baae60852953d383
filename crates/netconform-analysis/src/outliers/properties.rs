//! Fleet-wide property outliers.
//!
//! Each property is a pure accessor from a configuration to a server set.
//! Devices are partitioned by set equality and ranked like any other
//! subject. Properties are independent of one another.

use std::collections::BTreeSet;

use netconform_core::constants::OUTLIERS_THRESHOLD;
use netconform_core::errors::OutlierError;
use netconform_core::tracing::metrics;
use netconform_core::types::FxHashMap;
use rayon::prelude::*;

use super::ranking::rank_significant;
use super::types::OutlierSet;
use crate::equivalence::EquivalenceClass;
use crate::fleet::{Configuration, FleetSnapshot, ServerSet};

/// Reads one property off a configuration.
pub type PropertyAccessor = fn(&Configuration) -> &ServerSet;

/// A named property checked by the `sameServers` hypothesis.
#[derive(Clone, Copy)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub accessor: PropertyAccessor,
}

impl std::fmt::Debug for PropertyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn dns_servers(c: &Configuration) -> &ServerSet {
    &c.dns_servers
}

fn logging_servers(c: &Configuration) -> &ServerSet {
    &c.logging_servers
}

fn ntp_servers(c: &Configuration) -> &ServerSet {
    &c.ntp_servers
}

fn snmp_trap_servers(c: &Configuration) -> &ServerSet {
    &c.snmp_trap_servers
}

fn tacacs_servers(c: &Configuration) -> &ServerSet {
    &c.tacacs_servers
}

/// The server-set properties, in report order.
pub static SERVER_PROPERTIES: &[PropertyDefinition] = &[
    PropertyDefinition {
        name: "DnsServers",
        accessor: dns_servers,
    },
    PropertyDefinition {
        name: "LoggingServers",
        accessor: logging_servers,
    },
    PropertyDefinition {
        name: "NtpServers",
        accessor: ntp_servers,
    },
    PropertyDefinition {
        name: "SnmpTrapServers",
        accessor: snmp_trap_servers,
    },
    PropertyDefinition {
        name: "TacacsServers",
        accessor: tacacs_servers,
    },
];

/// Look up a property by name.
pub fn property(name: &str) -> Option<&'static PropertyDefinition> {
    SERVER_PROPERTIES.iter().find(|p| p.name == name)
}

impl PropertyDefinition {
    /// Partition `nodes` by this property's value.
    pub fn partition(
        &self,
        fleet: &FleetSnapshot,
        nodes: &BTreeSet<String>,
    ) -> Vec<EquivalenceClass<ServerSet>> {
        let mut groups: FxHashMap<&ServerSet, BTreeSet<String>> = FxHashMap::default();
        for node in nodes {
            if let Some(config) = fleet.get(node) {
                groups
                    .entry((self.accessor)(config))
                    .or_default()
                    .insert(node.clone());
            }
        }
        groups
            .into_iter()
            .map(|(value, members)| EquivalenceClass::present(members, value.clone()))
            .collect()
    }

    /// Rank this property over `nodes` and return a finding if the
    /// outliers are significant.
    pub fn scan(
        &self,
        fleet: &FleetSnapshot,
        nodes: &BTreeSet<String>,
    ) -> Result<Option<OutlierSet<ServerSet>>, OutlierError> {
        let classes = self.partition(fleet, nodes);
        let Some(ranked) = rank_significant(self.name, classes, OUTLIERS_THRESHOLD)? else {
            return Ok(None);
        };
        let Some(definition) = ranked.majority else {
            return Ok(None);
        };
        tracing::debug!(
            { metrics::PROPERTY } = self.name,
            { metrics::OUTLIERS } = ranked.outliers.len(),
            "property outliers found"
        );
        Ok(Some(OutlierSet {
            name: self.name.to_string(),
            definition,
            conformers: ranked.conformers,
            outliers: ranked.outliers,
        }))
    }
}

/// Scan every registered property in parallel. Findings come back sorted
/// by property name.
pub fn scan_all(
    fleet: &FleetSnapshot,
    nodes: &BTreeSet<String>,
) -> Result<Vec<OutlierSet<ServerSet>>, OutlierError> {
    let found: Vec<Option<OutlierSet<ServerSet>>> = SERVER_PROPERTIES
        .par_iter()
        .map(|p| p.scan(fleet, nodes))
        .collect::<Result<_, _>>()?;

    let mut findings: Vec<_> = found.into_iter().flatten().collect();
    findings.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servers(addrs: &[&str]) -> ServerSet {
        addrs.iter().map(|s| s.to_string()).collect()
    }

    fn fleet_with_ntp(values: &[(&str, &[&str])]) -> FleetSnapshot {
        FleetSnapshot::from_configurations(values.iter().map(|(name, addrs)| {
            let mut c = Configuration::new(*name);
            c.ntp_servers = servers(addrs);
            c
        }))
    }

    fn all(fleet: &FleetSnapshot) -> BTreeSet<String> {
        fleet.device_names().map(String::from).collect()
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(SERVER_PROPERTIES.len(), 5);
        assert!(property("NtpServers").is_some());
        assert!(property("BgpPeers").is_none());
    }

    #[test]
    fn test_ntp_outlier_with_empty_set() {
        let fleet = fleet_with_ntp(&[
            ("a", &["10.0.0.1"]),
            ("b", &["10.0.0.1"]),
            ("c", &["10.0.0.1"]),
            ("d", &["10.0.0.1"]),
            ("e", &["10.0.0.1"]),
            ("f", &[]),
        ]);
        let ntp = property("NtpServers").unwrap();
        let finding = ntp.scan(&fleet, &all(&fleet)).unwrap().unwrap();
        assert_eq!(finding.definition, servers(&["10.0.0.1"]));
        assert_eq!(finding.outliers, BTreeSet::from(["f".to_string()]));
        assert_eq!(finding.conformers.len(), 5);
    }

    #[test]
    fn test_partition_is_order_insensitive() {
        let fleet = fleet_with_ntp(&[
            ("a", &["10.0.0.1", "10.0.0.2"]),
            ("b", &["10.0.0.2", "10.0.0.1"]),
        ]);
        let classes = property("NtpServers").unwrap().partition(&fleet, &all(&fleet));
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_properties_are_independent() {
        let mut configs = Vec::new();
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            let mut c = Configuration::new(*name);
            c.ntp_servers = servers(&["10.0.0.1"]);
            c.dns_servers = servers(&["8.8.8.8"]);
            if i == 0 {
                c.ntp_servers = servers(&["10.9.9.9"]);
            }
            if i == 3 {
                c.dns_servers = servers(&["1.1.1.1"]);
            }
            configs.push(c);
        }
        let fleet = FleetSnapshot::from_configurations(configs);
        let findings = scan_all(&fleet, &all(&fleet)).unwrap();
        let names: Vec<_> = findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["DnsServers", "NtpServers"]);
        assert!(findings[0].outliers.contains("d"));
        assert!(findings[0].conformers.contains("a"));
        assert!(findings[1].outliers.contains("a"));
    }
}
