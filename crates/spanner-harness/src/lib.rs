//! Per-test Cloud Spanner databases.
//!
//! A [`Harness`] provisions the shared emulator instance once per run, hands
//! each test a [`TestDatabaseClient`] bound to a database named after the
//! test, and reclaims registered databases in a final teardown pass:
//!
//! ```no_run
//! # async fn run() -> spanner_harness::Result<()> {
//! let harness = spanner_harness::Harness::from_env()?;
//! harness.ensure_instance().await?;
//!
//! let client = harness.client("users::insert_and_read").await?;
//! client.create_database("schemas/users.sql").await?;
//! // ... test body ...
//! client.defer_drop();
//!
//! harness.drop_all().await?;
//! # Ok(())
//! # }
//! ```

mod admin;

mod client;
pub use client::TestDatabaseClient;

mod config;
pub use config::{EmulatorConfig, EMULATOR_HOST_VAR, EMULATOR_REST_HOST_VAR};

mod connect;
pub use connect::connect;

mod harness;
pub use harness::Harness;

mod naming;
pub use naming::{DatabaseName, NameHasher};

mod provision;
pub use provision::InstanceProvisioner;

mod registry;
pub use registry::PendingDropRegistry;

pub mod schema;

mod teardown;
pub use teardown::BulkTeardown;

pub use spanner_harness_core::{
    driver::{self, Capability, Driver},
    path::{TEST_INSTANCE, TEST_PROJECT},
    stmt, DatabasePath, DropFailure, Error, InstancePath, Result,
};
