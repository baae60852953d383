//! Structured field names shared by netconform's tracing events.
//!
//! Use these with the braced-constant form of the `tracing` macros,
//! e.g. `info!({ IN_SCOPE_DEVICES } = n, "...")`, so log queries can rely
//! on one spelling per field.

/// Fleet: file or label a snapshot was loaded from.
pub const SNAPSHOT_ORIGIN: &str = "snapshot_origin";

/// Fleet: devices in a loaded snapshot.
pub const DEVICES: &str = "devices";

/// Query: hypothesis under test.
pub const HYPOTHESIS: &str = "hypothesis";

/// Query: raw node filter pattern.
pub const NODE_REGEX: &str = "node_regex";

/// Query: devices left after node filtering.
pub const IN_SCOPE_DEVICES: &str = "in_scope_devices";

/// Query: findings in the final answer.
pub const FINDINGS: &str = "findings";

/// Query: wall time in milliseconds.
pub const QUERY_TIME_MS: &str = "query_time_ms";

/// Equivalence: structure type being analyzed.
pub const STRUCT_TYPE: &str = "struct_type";

/// Equivalence: structure types built by a source.
pub const STRUCT_TYPES: &str = "struct_types";

/// Equivalence: structure name being ranked.
pub const STRUCT_NAME: &str = "struct_name";

/// Equivalence: out-of-scope devices stripped from a source's classes.
pub const DROPPED_DEVICES: &str = "dropped_devices";

/// Scanner: server property being compared.
pub const PROPERTY: &str = "property";

/// Ranking: what was compared, e.g. `Named structure IpAccessList acl1`.
pub const SUBJECT: &str = "subject";

/// Ranking: devices in the majority class.
pub const CONFORMERS: &str = "conformers";

/// Ranking: devices outside the majority class.
pub const OUTLIERS: &str = "outliers";

/// Ranking: `outliers / (outliers + conformers)`.
pub const OUTLIER_RATIO: &str = "outlier_ratio";

/// Ranking: whether the ratio is within the threshold.
pub const SIGNIFICANT: &str = "significant";
