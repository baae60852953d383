//! Majority-vote ranking of an equivalence partition.
//!
//! The class with the most devices is hypothesized to be correct and its
//! devices become the conformers. Every other class is merged into a
//! single outlier set; the individual minority values are not kept.
//!
//! Ties on size are broken by comparing the sorted device sets
//! lexicographically, smallest first. Classes of one subject are disjoint,
//! so this is a total order and the winner never depends on input order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use netconform_core::errors::OutlierError;
use netconform_core::tracing::metrics;
use netconform_core::types::Ratio;

use crate::equivalence::EquivalenceClass;

/// A conformer/outlier split, before the significance threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    /// The majority value, or `None` if the majority is the absent class.
    pub majority: Option<T>,
    pub conformers: BTreeSet<String>,
    pub outliers: BTreeSet<String>,
}

impl<T> Ranked<T> {
    /// Outliers as a share of all devices compared. `None` for an empty split.
    pub fn outlier_ratio(&self) -> Option<f64> {
        let total = self.conformers.len() + self.outliers.len();
        (total > 0).then(|| self.outliers.len() as f64 / total as f64)
    }

    /// True when there is at least one outlier and the outlier share is at
    /// most `threshold`.
    pub fn is_significant(&self, threshold: Ratio) -> bool {
        !self.outliers.is_empty()
            && threshold.admits(
                self.outliers.len(),
                self.conformers.len() + self.outliers.len(),
            )
    }
}

/// Ordering that puts the winning class first: larger classes before
/// smaller ones, then lexicographically smaller device sets.
pub fn majority_order<T>(a: &EquivalenceClass<T>, b: &EquivalenceClass<T>) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.nodes.cmp(&b.nodes))
}

/// Split `classes` into conformers (the majority class) and outliers
/// (everyone else).
///
/// `subject` names what was compared and only appears in the error raised
/// when `classes` is empty.
pub fn rank<T>(
    subject: &str,
    mut classes: Vec<EquivalenceClass<T>>,
) -> Result<Ranked<T>, OutlierError> {
    let winner = classes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| majority_order(a, b))
        .map(|(idx, _)| idx)
        .ok_or_else(|| OutlierError::EmptyEquivalence {
            subject: subject.to_string(),
        })?;

    let majority = classes.swap_remove(winner);
    let outliers = classes.into_iter().flat_map(|c| c.nodes).collect();

    Ok(Ranked {
        majority: majority.representative,
        conformers: majority.nodes,
        outliers,
    })
}

/// Rank `classes` and keep the result only if it passes `threshold`.
pub fn rank_significant<T>(
    subject: &str,
    classes: Vec<EquivalenceClass<T>>,
    threshold: Ratio,
) -> Result<Option<Ranked<T>>, OutlierError> {
    let ranked = rank(subject, classes)?;
    let significant = ranked.is_significant(threshold);
    tracing::trace!(
        { metrics::SUBJECT } = subject,
        { metrics::CONFORMERS } = ranked.conformers.len(),
        { metrics::OUTLIERS } = ranked.outliers.len(),
        { metrics::OUTLIER_RATIO } = ranked.outlier_ratio().unwrap_or(0.0),
        { metrics::SIGNIFICANT } = significant,
        "ranked equivalence classes"
    );
    Ok(significant.then_some(ranked))
}
