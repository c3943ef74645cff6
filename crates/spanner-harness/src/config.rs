use crate::{Error, Result};

/// `host:port` of the emulator's gRPC endpoint. Required.
pub const EMULATOR_HOST_VAR: &str = "SPANNER_EMULATOR_HOST";

/// `host:port` of the emulator's REST gateway. Optional.
pub const EMULATOR_REST_HOST_VAR: &str = "SPANNER_EMULATOR_REST_HOST";

/// Port the emulator serves its REST gateway on by default.
const DEFAULT_REST_PORT: u16 = 9020;

/// Where the emulator listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Value of `SPANNER_EMULATOR_HOST`.
    pub host: String,

    /// REST gateway address the harness talks to.
    pub rest_host: String,
}

impl EmulatorConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<EmulatorConfig> {
        EmulatorConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<EmulatorConfig> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get(EMULATOR_HOST_VAR).ok_or_else(|| {
            Error::invalid_configuration(format!(
                "{EMULATOR_HOST_VAR} must be set to the emulator's host:port"
            ))
        })?;

        let rest_host = match get(EMULATOR_REST_HOST_VAR) {
            Some(rest_host) => rest_host,
            None => format!("{}:{DEFAULT_REST_PORT}", hostname(&host)),
        };

        Ok(EmulatorConfig { host, rest_host })
    }

    /// Driver URL understood by [`crate::connect`].
    pub fn url(&self) -> String {
        format!("spanner-emulator://{}", self.rest_host)
    }
}

/// `host` without its port. Bracketed IPv6 literals keep their brackets.
fn hostname(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !name.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            if name.contains(':') && !name.starts_with('[') {
                // Bare IPv6 literal without a port.
                host
            } else {
                name
            }
        }
        _ => host,
    }
}
