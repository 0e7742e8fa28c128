//! Tracing for tests of the darts workspace.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Fallback when neither `TEST_LOG` nor `RUST_LOG` is set: warnings only.
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Install a test-writer subscriber once per test binary.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_DIRECTIVES`].
/// Safe to call from every test; later calls are no-ops.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVES);
}

/// Like [`init`], with a different fallback filter, e.g. `"darts_backend=debug"`.
///
/// Only the first call in a process decides the filter.
pub fn init_with_default(directives: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = filter_from_env().unwrap_or_else(|| EnvFilter::new(directives));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|name| std::env::var(name).ok())
        .map(EnvFilter::new)
}
