use crate::{
    connect, BulkTeardown, Driver, EmulatorConfig, InstancePath, InstanceProvisioner, NameHasher,
    PendingDropRegistry, Result, TestDatabaseClient,
};

use spanner_harness_core::err;
use std::sync::{
    atomic::{AtomicUsize, Ordering::Relaxed},
    Arc,
};

/// Naming and lifecycle service for one test run.
///
/// Owns the driver, the [`NameHasher`] and the [`PendingDropRegistry`].
/// Cloning is cheap and clones share all three.
#[derive(Debug, Clone)]
pub struct Harness {
    driver: Arc<dyn Driver>,
    instance: InstancePath,
    hasher: Arc<NameHasher>,
    registry: Arc<PendingDropRegistry>,
}

impl Harness {
    /// Create a harness with a randomly seeded [`NameHasher`].
    pub fn new(driver: impl Driver) -> Harness {
        Harness::with_hasher(Arc::new(driver), NameHasher::new())
    }

    pub fn with_hasher(driver: Arc<dyn Driver>, hasher: NameHasher) -> Harness {
        let hasher = Arc::new(hasher);

        Harness {
            driver,
            instance: InstancePath::testing(),
            registry: Arc::new(PendingDropRegistry::new(hasher.clone())),
            hasher,
        }
    }

    /// Create a harness for the emulator named by `SPANNER_EMULATOR_HOST`.
    pub fn from_env() -> Result<Harness> {
        let config = EmulatorConfig::from_env()?;
        Harness::connect(&config.url())
    }

    /// Create a harness from a driver URL, see [`crate::connect`].
    pub fn connect(url: &str) -> Result<Harness> {
        Ok(Harness::with_hasher(connect(url)?, NameHasher::new()))
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn instance(&self) -> &InstancePath {
        &self.instance
    }

    pub fn hasher(&self) -> &NameHasher {
        &self.hasher
    }

    pub fn registry(&self) -> &PendingDropRegistry {
        &self.registry
    }

    pub fn provisioner(&self) -> InstanceProvisioner {
        InstanceProvisioner::new(self.driver.clone(), self.instance.clone())
    }

    pub fn teardown(&self) -> BulkTeardown {
        BulkTeardown::new(
            self.driver.clone(),
            self.instance.clone(),
            self.registry.clone(),
        )
    }

    /// Create the shared instance unless it already exists.
    pub async fn ensure_instance(&self) -> Result<()> {
        self.provisioner().ensure().await
    }

    /// Open a client for the database derived from `identifier`.
    pub async fn client(&self, identifier: &str) -> Result<TestDatabaseClient> {
        let name = self.hasher.derive_name(identifier);
        let path = self.instance.database(name.as_str());

        let connection = self.driver.connect().await.map_err(|err| {
            err.context(err!("failed to connect; identifier={identifier}"))
        })?;

        Ok(TestDatabaseClient::new(
            identifier.to_string(),
            name,
            path,
            connection,
            self.registry.clone(),
        ))
    }

    /// Open a client named after the running test.
    ///
    /// The test runner names each test's thread after the test path. On the
    /// main thread, or an unnamed one, a process-wide counter is used instead.
    pub async fn client_for_current_test(&self) -> Result<TestDatabaseClient> {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

        let identifier = match std::thread::current().name() {
            Some(name) if name != "main" => name.to_string(),
            _ => format!("test-{}", NEXT_ID.fetch_add(1, Relaxed)),
        };

        self.client(&identifier).await
    }

    /// Run a teardown pass over the registered databases.
    pub async fn drop_all(&self) -> Result<()> {
        self.teardown().drop_all().await
    }
}
