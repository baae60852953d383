//! Property tests for majority ranking over arbitrary disjoint partitions.

use std::collections::BTreeSet;

use netconform_analysis::equivalence::EquivalenceClass;
use netconform_analysis::outliers::ranking::{rank, rank_significant};
use netconform_core::constants::OUTLIERS_THRESHOLD;
use proptest::prelude::*;

/// Split devices `d000..d{n}` into classes by the given labels. Each label
/// becomes one class, so the classes are disjoint and cover every device.
fn partition(labels: &[u8]) -> Vec<EquivalenceClass<u8>> {
    let mut classes: Vec<EquivalenceClass<u8>> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let node = format!("d{i:03}");
        match classes.iter_mut().find(|c| c.representative == Some(*label)) {
            Some(class) => {
                class.nodes.insert(node);
            }
            None => classes.push(EquivalenceClass::present(BTreeSet::from([node]), *label)),
        }
    }
    classes
}

proptest! {
    #[test]
    fn prop_conformers_and_outliers_partition_the_fleet(
        labels in prop::collection::vec(0u8..5, 1..60)
    ) {
        let classes = partition(&labels);
        let largest = classes.iter().map(|c| c.len()).max().unwrap();
        let ranked = rank("subject", classes).unwrap();

        prop_assert!(ranked.conformers.is_disjoint(&ranked.outliers));
        prop_assert_eq!(ranked.conformers.len() + ranked.outliers.len(), labels.len());
        prop_assert_eq!(ranked.conformers.len(), largest);
    }

    #[test]
    fn prop_threshold_decides_reporting(labels in prop::collection::vec(0u8..4, 1..60)) {
        let classes = partition(&labels);
        let ranked = rank("subject", classes.clone()).unwrap();
        let outliers = ranked.outliers.len();
        let total = labels.len();
        let reported = rank_significant("subject", classes, OUTLIERS_THRESHOLD).unwrap();

        if outliers > 0 && outliers * 3 <= total {
            let reported = reported.expect("significant split must be reported");
            prop_assert_eq!(&reported, &ranked);
            prop_assert!(reported.conformers.len() >= 2 * reported.outliers.len());
        } else {
            prop_assert!(reported.is_none());
        }
    }

    #[test]
    fn prop_single_class_never_reported(n in 1usize..40) {
        let labels = vec![7u8; n];
        let reported = rank_significant("subject", partition(&labels), OUTLIERS_THRESHOLD).unwrap();
        prop_assert!(reported.is_none());
    }

    #[test]
    fn prop_input_order_does_not_change_result(labels in prop::collection::vec(0u8..4, 1..40)) {
        let classes = partition(&labels);
        let mut reversed = classes.clone();
        reversed.reverse();
        prop_assert_eq!(rank("subject", classes).unwrap(), rank("subject", reversed).unwrap());
    }
}
