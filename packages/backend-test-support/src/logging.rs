//! Logging bootstrap for backend tests.
//!
//! Output goes through the libtest writer so it is only shown for failing
//! tests. `TEST_LOG` wins over `RUST_LOG`; the fallback is `warn`.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: Lazy<()> = Lazy::new(|| {
    // Another test binary helper may have installed one already.
    let _ = fmt()
        .with_env_filter(filter())
        .with_test_writer()
        .without_time()
        .with_target(false)
        .try_init();
});

fn filter() -> EnvFilter {
    EnvFilter::try_from_env("TEST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init() {
    Lazy::force(&SUBSCRIBER);
}
