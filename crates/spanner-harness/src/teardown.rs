use crate::{admin, DatabaseName, Driver, DropFailure, Error, InstancePath, PendingDropRegistry, Result};

use async_stream::try_stream;
use spanner_harness_core::{
    driver::{operation::ListDatabases, Database},
    err, Connection,
};
use std::{collections::HashSet, sync::Arc};
use tokio_stream::{Stream, StreamExt};

/// End-of-run sweep of registered databases.
#[derive(Debug, Clone)]
pub struct BulkTeardown {
    driver: Arc<dyn Driver>,
    instance: InstancePath,
    registry: Arc<PendingDropRegistry>,

    /// Page size requested from the listing. `None` lets the backend decide.
    page_size: Option<u32>,
}

impl BulkTeardown {
    pub fn new(
        driver: Arc<dyn Driver>,
        instance: InstancePath,
        registry: Arc<PendingDropRegistry>,
    ) -> BulkTeardown {
        BulkTeardown {
            driver,
            instance,
            registry,
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> BulkTeardown {
        self.page_size = Some(page_size);
        self
    }

    /// Drop every listed database that is registered for dropping.
    ///
    /// Matching databases leave the registry as soon as their drop is
    /// scheduled, so a failed drop is not retried by a later pass. Drops run
    /// concurrently and every failure is reported in one
    /// [`teardown_failed`](Error::teardown_failed) error. If the listing
    /// fails, nothing is dropped and the registry is unchanged.
    ///
    /// Names registered before the pass started but missing from the listing
    /// belong to databases that are already gone; they are unregistered
    /// without error. Names registered while the listing runs are left for a
    /// later pass.
    pub async fn drop_all(&self) -> Result<()> {
        let instance = &self.instance;
        let registered: HashSet<DatabaseName> = self.registry.names().into_iter().collect();

        let databases = self
            .listed_databases()
            .await
            .map_err(|err| err.context(err!("failed to list databases; instance={instance}")))?;

        let mut drops = vec![];
        let mut listed = HashSet::new();

        for database in &databases {
            let Some(name) = DatabaseName::parse(database.database_id()) else {
                continue;
            };

            listed.insert(name.clone());

            if !self.registry.take_name(&name) {
                continue;
            }

            let driver = self.driver.clone();
            let path = instance.database(name.as_str());

            let handle = tokio::spawn(async move {
                let mut connection = driver.connect().await?;
                admin::drop_database(&mut *connection, &path).await
            });

            drops.push((name, handle));
        }

        for name in registered.difference(&listed) {
            if self.registry.take_name(name) {
                tracing::debug!(database = %name, "registered database not listed; unregistered");
            }
        }

        let scheduled = drops.len();
        let mut failures = vec![];

        for (name, handle) in drops {
            let error = match handle.await {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err,
                Err(join_err) => err!("drop task failed; {join_err}"),
            };

            tracing::warn!(database = %name, %error, "failed to drop database");
            failures.push(DropFailure {
                database: name.to_string(),
                error,
            });
        }

        tracing::info!(
            %instance,
            listed = databases.len(),
            scheduled,
            failed = failures.len(),
            "teardown pass finished"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::teardown_failed(failures))
        }
    }

    async fn listed_databases(&self) -> Result<Vec<Database>> {
        let mut connection = self.driver.connect().await?;

        let stream = list_databases(&mut *connection, &self.instance, self.page_size);
        tokio::pin!(stream);

        let mut databases = vec![];
        while let Some(database) = stream.next().await {
            databases.push(database?);
        }

        Ok(databases)
    }
}

/// Every database under `instance`, fetched one page at a time as the stream
/// is consumed.
fn list_databases<'a>(
    connection: &'a mut dyn Connection,
    instance: &'a InstancePath,
    page_size: Option<u32>,
) -> impl Stream<Item = Result<Database>> + 'a {
    try_stream! {
        let mut page_token: Option<String> = None;

        loop {
            let op = ListDatabases {
                instance: instance.clone(),
                page_token: page_token.take(),
                page_size,
            };

            let page = connection.exec(op.into()).await?.into_databases()?;

            for database in page.databases {
                yield database;
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
    }
}
