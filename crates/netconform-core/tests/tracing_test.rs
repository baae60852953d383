//! Tests for the netconform tracing setup.

use std::sync::Mutex;

use std::collections::BTreeSet;

use netconform_core::tracing::{init_tracing, metrics};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_with_module_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("NETCONFORM_LOG", "netconform_analysis=debug,netconform_core=warn");
    init_tracing();
    std::env::remove_var("NETCONFORM_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still alive after repeated init");
}

#[test]
fn test_metric_field_names_are_distinct() {
    let names = [
        metrics::SNAPSHOT_ORIGIN,
        metrics::DEVICES,
        metrics::HYPOTHESIS,
        metrics::NODE_REGEX,
        metrics::IN_SCOPE_DEVICES,
        metrics::FINDINGS,
        metrics::QUERY_TIME_MS,
        metrics::STRUCT_TYPE,
        metrics::STRUCT_TYPES,
        metrics::STRUCT_NAME,
        metrics::DROPPED_DEVICES,
        metrics::PROPERTY,
        metrics::SUBJECT,
        metrics::CONFORMERS,
        metrics::OUTLIERS,
        metrics::OUTLIER_RATIO,
        metrics::SIGNIFICANT,
    ];
    let unique: BTreeSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
    assert!(names.iter().all(|n| !n.is_empty() && !n.contains(' ')));
}

#[test]
fn test_metric_fields_usable_in_events() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    tracing::info!(
        { metrics::HYPOTHESIS } = "sameName",
        { metrics::IN_SCOPE_DEVICES } = 4usize,
        "field constants as event keys"
    );
}
