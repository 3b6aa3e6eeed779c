use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOCATION_URL: &str = "https://whereis.global";
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directions provider key. Read, but no directions request is ever sent.
    pub maps_api_key: Option<String>,
    pub location_url: String,
    pub location_timeout: Duration,
    /// Answer unknown actions with 204 and denied distance requests with 403
    /// instead of an empty 200.
    pub strict: bool,
    pub messages_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            maps_api_key: None,
            location_url: DEFAULT_LOCATION_URL.to_string(),
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
            strict: false,
            messages_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match var("SPYGLASS_BIND") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("SPYGLASS_BIND is not a socket address: {}", addr))?,
            None => defaults.bind_addr,
        };

        let location_timeout = match var("SPYGLASS_LOCATION_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(secs.parse().with_context(|| {
                format!("SPYGLASS_LOCATION_TIMEOUT_SECS is not a number: {}", secs)
            })?),
            None => defaults.location_timeout,
        };

        let strict = var("SPYGLASS_STRICT")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.strict);

        Ok(Self {
            bind_addr,
            maps_api_key: var("GOOGLE_MAPS_API_KEY"),
            location_url: var("SPYGLASS_LOCATION_URL").unwrap_or(defaults.location_url),
            location_timeout,
            strict,
            messages_path: var("SPYGLASS_MESSAGES").map(PathBuf::from),
        })
    }
}
