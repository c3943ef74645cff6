use crate::{Driver, Error, Result};

use std::sync::Arc;
use url::Url;

/// Create a driver from a URL.
///
/// * `spanner-emulator://host:port`: the emulator's REST gateway (feature
///   `emulator`).
/// * `memory://`: an in-process backend (feature `memory`). Every call
///   returns a fresh, empty backend.
pub fn connect(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url).map_err(|err| {
        Error::invalid_configuration(format!("invalid driver URL; url={url}; {err}"))
    })?;

    match parsed.scheme() {
        "spanner-emulator" => connect_emulator(&parsed),
        "memory" => connect_memory(),
        scheme => Err(Error::invalid_configuration(format!(
            "unsupported driver; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "emulator")]
fn connect_emulator(url: &Url) -> Result<Arc<dyn Driver>> {
    let driver = spanner_harness_driver_emulator::Emulator::new(url.as_str())?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "emulator"))]
fn connect_emulator(_url: &Url) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_configuration(
        "`emulator` feature not enabled",
    ))
}

#[cfg(feature = "memory")]
fn connect_memory() -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(spanner_harness_driver_memory::Memory::new()))
}

#[cfg(not(feature = "memory"))]
fn connect_memory() -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_configuration("`memory` feature not enabled"))
}
