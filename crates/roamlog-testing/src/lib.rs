//! Testing infrastructure for roamlog tests.
//!
//! - `fixtures`: sample drafts, published entries and places
//! - `assertions`: invariant checks for draft content
//! - `init_tracing`: opt-in log output while running tests

pub mod assertions;
pub mod fixtures;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary.
///
/// Filtered by `RUST_LOG`, defaulting to `warn`. Output goes through the
/// test writer so it is captured unless `--nocapture` is passed.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
