#[macro_use]
mod macros;

pub mod fixtures;

pub use harness_test::HarnessTest;
pub use logging_driver::{ExecLog, LoggingDriver};

use spanner_harness::{Capability, Driver};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// A backend the suite can run against.
pub trait Setup: Send + Sync + 'static {
    /// Driver for the backend. Called once per test.
    fn driver(&self) -> Arc<dyn Driver>;

    fn capability(&self) -> &'static Capability;
}

/// Path of a schema file under `tests/schemas`.
pub fn schema(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("schemas")
        .join(name)
}

/// Route `tracing` output through the test harness's captured output.
/// `RUST_LOG` selects what is shown.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
