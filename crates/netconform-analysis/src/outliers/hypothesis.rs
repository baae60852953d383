//! Sameness hypotheses and the name-only transform.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use netconform_core::errors::OutlierError;
use serde::{Deserialize, Serialize};

use crate::equivalence::{EquivalenceClass, NamedStructureEquivalenceSets};

/// The comparison criterion an outliers query tests.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Hypothesis {
    /// Same-named structures should have identical definitions.
    #[default]
    SameDefinition,
    /// Every device should define structures of the same names.
    SameName,
    /// Every device should use the same set of protocol servers.
    SameServers,
}

impl Hypothesis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SameDefinition => "sameDefinition",
            Self::SameName => "sameName",
            Self::SameServers => "sameServers",
        }
    }

    pub fn all() -> &'static [Hypothesis] {
        &[Self::SameDefinition, Self::SameName, Self::SameServers]
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hypothesis {
    type Err = OutlierError;

    /// Accepts the camelCase names as well as `SAME_DEFINITION` style.
    /// Matching is exact: no case folding, no whitespace trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sameDefinition" | "SAME_DEFINITION" => Ok(Self::SameDefinition),
            "sameName" | "SAME_NAME" => Ok(Self::SameName),
            "sameServers" | "SAME_SERVERS" => Ok(Self::SameServers),
            other => Err(OutlierError::UnknownHypothesis(other.to_string())),
        }
    }
}

/// Collapse each name's classes into at most two: devices that define the
/// name and devices in `nodes` that do not.
///
/// Structural differences between definitions are discarded. The present
/// class keeps the first defined representative; the absent class has
/// none and is only emitted when non-empty.
pub fn to_name_only<T: Clone>(
    sets: NamedStructureEquivalenceSets<T>,
    nodes: &BTreeSet<String>,
) -> NamedStructureEquivalenceSets<T> {
    let mut sets = sets.map_classes(|_name, classes| {
        let representative = classes.iter().find_map(|c| c.representative.clone());
        let present: BTreeSet<String> = classes
            .iter()
            .filter(|c| c.is_present())
            .flat_map(|c| c.nodes.iter().cloned())
            .collect();
        let absent: BTreeSet<String> = nodes.difference(&present).cloned().collect();

        let mut collapsed = Vec::with_capacity(2);
        if let Some(representative) = representative {
            collapsed.push(EquivalenceClass::present(present, representative));
        }
        if !absent.is_empty() {
            collapsed.push(EquivalenceClass::absent(absent));
        }
        collapsed
    });
    sets.clean();
    sets
}
