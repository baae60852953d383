//! Where equivalence classes come from.

use std::collections::{BTreeMap, BTreeSet};

use netconform_core::errors::OutlierError;
use netconform_core::tracing::metrics;
use rayon::prelude::*;
use serde_json::Value;

use super::{EquivalenceClass, NamedStructureEquivalenceSets};
use crate::fleet::FleetSnapshot;

/// Produces, per structure type, the same-name equivalence classes over a
/// set of in-scope devices.
///
/// Implementations must return pairwise-disjoint classes per name drawn
/// only from `nodes`. An empty `struct_types` requests every type.
pub trait EquivalenceSource: Send + Sync {
    fn equivalence_sets(
        &self,
        fleet: &FleetSnapshot,
        nodes: &BTreeSet<String>,
        struct_types: &BTreeSet<String>,
    ) -> Result<BTreeMap<String, NamedStructureEquivalenceSets<Value>>, OutlierError>;
}

/// Groups devices by exact equality of same-named structure definitions.
///
/// Only devices that define a name take part in that name's classes.
/// Classes are ordered by their smallest device name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameNameBuilder;

impl SameNameBuilder {
    pub fn new() -> Self {
        Self
    }

    fn build_type(
        fleet: &FleetSnapshot,
        nodes: &BTreeSet<String>,
        struct_type: &str,
    ) -> NamedStructureEquivalenceSets<Value> {
        let mut by_name: BTreeMap<&str, Vec<EquivalenceClass<Value>>> = BTreeMap::new();

        // `nodes` iterates in sorted order, so each class is created by its
        // smallest member and classes come out in canonical order.
        for node in nodes {
            let Some(structures) = fleet.get(node).and_then(|c| c.structures_of(struct_type))
            else {
                continue;
            };
            for (name, definition) in structures {
                let classes = by_name.entry(name.as_str()).or_default();
                match classes
                    .iter_mut()
                    .find(|c| c.representative.as_ref() == Some(definition))
                {
                    Some(class) => {
                        class.nodes.insert(node.clone());
                    }
                    None => classes.push(EquivalenceClass::present(
                        BTreeSet::from([node.clone()]),
                        definition.clone(),
                    )),
                }
            }
        }

        let mut sets = NamedStructureEquivalenceSets::new(struct_type);
        for (name, classes) in by_name {
            sets.insert(name, classes);
        }
        sets
    }
}

impl EquivalenceSource for SameNameBuilder {
    fn equivalence_sets(
        &self,
        fleet: &FleetSnapshot,
        nodes: &BTreeSet<String>,
        struct_types: &BTreeSet<String>,
    ) -> Result<BTreeMap<String, NamedStructureEquivalenceSets<Value>>, OutlierError> {
        let types: BTreeSet<String> = if struct_types.is_empty() {
            nodes
                .iter()
                .filter_map(|n| fleet.get(n))
                .flat_map(|c| c.structure_types().map(String::from))
                .collect()
        } else {
            struct_types.clone()
        };

        let sets = types
            .into_par_iter()
            .map(|struct_type| {
                let sets = Self::build_type(fleet, nodes, &struct_type);
                (struct_type, sets)
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(
            { metrics::STRUCT_TYPES } = sets.len(),
            { metrics::IN_SCOPE_DEVICES } = nodes.len(),
            "built same-name equivalence sets"
        );
        Ok(sets)
    }
}
