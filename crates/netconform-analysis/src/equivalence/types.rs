//! Equivalence class containers.

use std::collections::{BTreeMap, BTreeSet};

use netconform_core::errors::OutlierError;
use serde::{Deserialize, Serialize};

/// A group of devices sharing one value for a subject.
///
/// `representative` is `None` for the "absent" class produced by the
/// name-only transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceClass<T> {
    pub nodes: BTreeSet<String>,
    pub representative: Option<T>,
}

impl<T> EquivalenceClass<T> {
    pub fn present(nodes: BTreeSet<String>, representative: T) -> Self {
        Self {
            nodes,
            representative: Some(representative),
        }
    }

    pub fn absent(nodes: BTreeSet<String>) -> Self {
        Self {
            nodes,
            representative: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_present(&self) -> bool {
        self.representative.is_some()
    }
}

/// All equivalence classes for one structure type, keyed by structure name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedStructureEquivalenceSets<T> {
    struct_type: String,
    same_named_structures: BTreeMap<String, Vec<EquivalenceClass<T>>>,
}

impl<T> NamedStructureEquivalenceSets<T> {
    pub fn new(struct_type: impl Into<String>) -> Self {
        Self {
            struct_type: struct_type.into(),
            same_named_structures: BTreeMap::new(),
        }
    }

    pub fn struct_type(&self) -> &str {
        &self.struct_type
    }

    pub fn same_named_structures(&self) -> &BTreeMap<String, Vec<EquivalenceClass<T>>> {
        &self.same_named_structures
    }

    pub fn insert(&mut self, name: impl Into<String>, classes: Vec<EquivalenceClass<T>>) {
        self.same_named_structures.insert(name.into(), classes);
    }

    pub fn is_empty(&self) -> bool {
        self.same_named_structures.is_empty()
    }

    /// Fails with `EmptyEquivalence` if any name arrived without classes.
    pub fn ensure_classes(&self) -> Result<(), OutlierError> {
        match self
            .same_named_structures
            .iter()
            .find(|(_, classes)| classes.is_empty())
        {
            Some((name, _)) => Err(OutlierError::EmptyEquivalence {
                subject: format!("Named structure {} {}", self.struct_type, name),
            }),
            None => Ok(()),
        }
    }

    /// Drop devices outside `scope` from every class. Returns how many
    /// device memberships were removed.
    pub fn retain_nodes(&mut self, scope: &BTreeSet<String>) -> usize {
        let mut removed = 0;
        for classes in self.same_named_structures.values_mut() {
            for class in classes.iter_mut() {
                let before = class.nodes.len();
                class.nodes.retain(|n| scope.contains(n));
                removed += before - class.nodes.len();
            }
        }
        removed
    }

    /// Remove empty classes, then names left with no classes.
    pub fn clean(&mut self) {
        for classes in self.same_named_structures.values_mut() {
            classes.retain(|c| !c.is_empty());
        }
        self.same_named_structures.retain(|_, classes| !classes.is_empty());
    }

    /// Rebuild the class list of every name through `f`.
    pub fn map_classes<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str, Vec<EquivalenceClass<T>>) -> Vec<EquivalenceClass<T>>,
    {
        let same_named_structures = self
            .same_named_structures
            .into_iter()
            .map(|(name, classes)| {
                let classes = f(&name, classes);
                (name, classes)
            })
            .collect();
        Self {
            struct_type: self.struct_type,
            same_named_structures,
        }
    }

    pub fn into_parts(self) -> (String, BTreeMap<String, Vec<EquivalenceClass<T>>>) {
        (self.struct_type, self.same_named_structures)
    }
}
