//! Startup configuration.
//!
//! One knob: the `CLOUD_PROVIDER` environment variable, read once at
//! startup. The handler never touches the process environment — it gets a
//! resolved [`Config`] injected at construction, which keeps request
//! handling pure and the tests free of `set_var`.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable naming the hosting platform.
pub const PROVIDER_VAR: &str = "CLOUD_PROVIDER";

/// Label used when the variable is unset or empty.
pub const DEFAULT_PROVIDER: &str = "Unknown";

/// Port the service listens on.
const DEFAULT_PORT: u16 = 80;

/// Resolved service configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Provider label substituted into the greeting, verbatim.
    pub provider: String,
    /// Address the listener binds to.
    pub addr: SocketAddr,
}

impl Config {
    /// Reads [`PROVIDER_VAR`] from the process environment.
    ///
    /// An unreadable (non-Unicode) value is treated the same as an unset
    /// one — a bad environment must not fail requests.
    pub fn from_env() -> Self {
        Self::new(env::var(PROVIDER_VAR).ok())
    }

    /// Builds a configuration from a raw variable value.
    ///
    /// This is the injection seam for tests; [`Config::from_env`] is this
    /// plus the environment read.
    pub fn new(provider: Option<String>) -> Self {
        Self {
            provider: resolve_provider(provider),
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

/// Unset and empty both fall back to [`DEFAULT_PROVIDER`]; any other value
/// passes through untouched. No trimming, no escaping.
fn resolve_provider(raw: Option<String>) -> String {
    match raw {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_PROVIDER.to_owned(),
    }
}
