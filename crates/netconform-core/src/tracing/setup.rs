//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "netconform=info";

/// Install the global subscriber for outlier queries.
///
/// `NETCONFORM_LOG` takes an `EnvFilter` directive. Query summaries log at
/// `info`, per-finding detail at `debug` and ranking ratios at `trace`, so
/// `NETCONFORM_LOG=netconform_analysis::outliers::ranking=trace` shows why a
/// subject was or was not reported. Unset or unparsable values fall back to
/// `netconform=info`.
///
/// Only the first call does anything, and it leaves an already installed
/// global subscriber in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
