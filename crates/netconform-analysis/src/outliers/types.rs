//! Findings produced by outlier detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::hypothesis::Hypothesis;
use crate::fleet::ServerSet;

/// A property-level finding: most devices share `definition`, `outliers`
/// do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierSet<T> {
    pub name: String,
    pub definition: T,
    pub conformers: BTreeSet<String>,
    pub outliers: BTreeSet<String>,
}

/// A named-structure finding.
///
/// `named_structure` is the majority definition, or `None` when the
/// majority of devices lack the structure altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedStructureOutlierSet<T> {
    pub hypothesis: Hypothesis,
    pub struct_type: String,
    pub name: String,
    pub named_structure: Option<T>,
    pub conformers: BTreeSet<String>,
    pub outliers: BTreeSet<String>,
}

impl<T> NamedStructureOutlierSet<T> {
    /// Report order: structure type, then name, then hypothesis.
    pub fn sort_key(&self) -> (&str, &str, Hypothesis) {
        (&self.struct_type, &self.name, self.hypothesis)
    }
}

/// Everything one outliers query found, in report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutliersAnswer {
    pub named_structure_outliers: Vec<NamedStructureOutlierSet<Value>>,
    pub server_outliers: Vec<OutlierSet<ServerSet>>,
}

impl OutliersAnswer {
    /// Build an answer, sorting both collections into report order
    /// regardless of the order they were produced in.
    pub fn new(
        mut named_structure_outliers: Vec<NamedStructureOutlierSet<Value>>,
        mut server_outliers: Vec<OutlierSet<ServerSet>>,
    ) -> Self {
        named_structure_outliers.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        server_outliers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            named_structure_outliers,
            server_outliers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.named_structure_outliers.is_empty() && self.server_outliers.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.named_structure_outliers.len() + self.server_outliers.len()
    }
}
