//! Driver for the Cloud Spanner emulator's REST gateway.
//!
//! The emulator serves gRPC on one port (`SPANNER_EMULATOR_HOST`, usually
//! 9010) and the same API as JSON over HTTP on another (usually 9020). This
//! driver speaks the JSON flavour.

mod op;
mod status;
mod value;
mod wire;

use serde::{de::DeserializeOwned, Serialize};
use spanner_harness_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response},
    DatabasePath, Error, Result,
};
use std::{collections::HashMap, time::Duration};
use url::Url;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Emulator {
    /// Gateway base URL, always ending in `/`.
    base_url: Url,

    /// Delay between polls of a pending long-running operation.
    poll_interval: Duration,

    /// Per-request timeout.
    request_timeout: Duration,
}

impl Emulator {
    /// Create a driver from a gateway URL.
    ///
    /// Accepts `http://host:port`, `https://host:port` and
    /// `spanner-emulator://host:port` (plain HTTP).
    pub fn new(url: &str) -> Result<Emulator> {
        let url = Url::parse(url).map_err(|err| {
            Error::invalid_configuration(format!("invalid emulator URL; url={url}; {err}"))
        })?;

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_configuration(format!("emulator URL has no host; url={url}"))
        })?;

        let scheme = match url.scheme() {
            "http" | "spanner-emulator" => "http",
            "https" => "https",
            scheme => {
                return Err(Error::invalid_configuration(format!(
                    "emulator URL must use http, https or spanner-emulator; scheme={scheme}"
                )))
            }
        };

        let mut base = format!("{scheme}://{host}");
        if let Some(port) = url.port() {
            base.push_str(&format!(":{port}"));
        }
        base.push('/');

        let base_url = Url::parse(&base).map_err(|err| {
            Error::invalid_configuration(format!("invalid emulator URL; url={base}; {err}"))
        })?;

        Ok(Emulator {
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Create a driver for a gateway listening on `host:port`.
    pub fn from_host(host: &str) -> Result<Emulator> {
        Emulator::new(&format!("http://{host}"))
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Emulator {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Emulator {
        self.request_timeout = request_timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Driver for Emulator {
    async fn connect(&self) -> Result<Box<dyn spanner_harness_core::Connection>> {
        Ok(Box::new(Connection::connect(self)?))
    }
}

#[derive(Debug)]
pub struct Connection {
    client: reqwest::Client,
    base_url: Url,
    poll_interval: Duration,

    /// Session per database, created on first data access.
    sessions: HashMap<DatabasePath, String>,
}

impl Connection {
    pub fn connect(emulator: &Emulator) -> Result<Connection> {
        let client = reqwest::Client::builder()
            .timeout(emulator.request_timeout)
            .build()
            .map_err(Error::driver_operation_failed)?;

        Ok(Connection {
            client,
            base_url: emulator.base_url.clone(),
            poll_interval: emulator.poll_interval,
            sessions: HashMap::new(),
        })
    }

    /// `{base}/v1/{path}`. Resource names contain `/` and `:` which must
    /// survive as-is, so the path is appended rather than joined per segment.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(&format!("v1/{}", path.trim_start_matches('/')))
            .map_err(|err| Error::invalid_configuration(format!("invalid request path; {err}")))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let request = self.client.get(self.endpoint(path)?).query(query);
        self.send(request).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.post(self.endpoint(path)?).json(body);
        self.send(request).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let request = self.client.delete(self.endpoint(path)?);
        let _: serde::de::IgnoredAny = self.send(request).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status::from_http(status.as_u16(), &body));
        }

        response.json().await.map_err(Error::driver_operation_failed)
    }

    /// Session used for data access to `database`.
    async fn session(&mut self, database: &DatabasePath) -> Result<String> {
        if let Some(session) = self.sessions.get(database) {
            return Ok(session.clone());
        }

        let session: wire::Session = self
            .post(
                &format!("{database}/sessions"),
                &serde_json::json!({}),
            )
            .await?;

        self.sessions.insert(database.clone(), session.name.clone());
        Ok(session.name)
    }
}

#[async_trait]
impl spanner_harness_core::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::EMULATOR
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Apply(op) => self.exec_apply(op).await,
            Operation::CreateDatabase(op) => self.exec_create_database(op).await,
            Operation::CreateInstance(op) => self.exec_create_instance(op).await,
            Operation::DropDatabase(op) => self.exec_drop_database(op).await,
            Operation::ExecuteSql(op) => self.exec_execute_sql(op).await,
            Operation::ListDatabases(op) => self.exec_list_databases(op).await,
            Operation::Read(op) => self.exec_read(op).await,
            Operation::WaitOperation(op) => self.exec_wait_operation(op).await,
        }
    }
}
