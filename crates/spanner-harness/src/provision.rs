use crate::{admin, Driver, InstancePath, Result};

use spanner_harness_core::{driver::operation::CreateInstance, err};
use std::sync::Arc;

/// Creates the shared test instance.
#[derive(Debug, Clone)]
pub struct InstanceProvisioner {
    driver: Arc<dyn Driver>,
    instance: InstancePath,
}

impl InstanceProvisioner {
    pub fn new(driver: Arc<dyn Driver>, instance: InstancePath) -> InstanceProvisioner {
        InstanceProvisioner { driver, instance }
    }

    pub fn instance(&self) -> &InstancePath {
        &self.instance
    }

    /// Make sure the instance exists.
    ///
    /// Waits for the creation to complete. An instance that already exists
    /// is success, whether the service says so right away or as the outcome
    /// of the creation, so concurrent and repeated calls are safe.
    pub async fn ensure(&self) -> Result<()> {
        let instance = &self.instance;

        let result = async {
            let mut connection = self.driver.connect().await?;
            admin::exec_and_wait(&mut *connection, CreateInstance::emulator(instance.clone()))
                .await
        }
        .await;

        match result {
            Ok(()) => {
                tracing::info!(%instance, "created instance");
                Ok(())
            }
            Err(err) if err.is_already_exists() => {
                tracing::debug!(%instance, "instance already exists");
                Ok(())
            }
            Err(err) => Err(err.context(err!("failed to create instance; instance={instance}"))),
        }
    }
}
