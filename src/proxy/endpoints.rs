//! GOPROXY precedence and parsing

use std::fmt;

use tracing::{debug, info};

use crate::proxy::error::ProxyError;
use crate::proxy::go_env::GoEnv;

/// Sentinel meaning "fetch from the VCS origin"; not supported, so skipped
const DIRECT: &str = "direct";

/// Sentinel meaning "no proxy may be used"
const OFF: &str = "off";

/// Where the GOPROXY value was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxySource {
    Flag,
    Environment,
    GoEnv,
    Default,
}

impl fmt::Display for ProxySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProxySource::Flag => "--goproxy",
            ProxySource::Environment => "os env GOPROXY",
            ProxySource::GoEnv => "go env GOPROXY",
            ProxySource::Default => "standard GOPROXY",
        };
        f.write_str(name)
    }
}

/// Ordered proxy base URLs, in the order they should be queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoints {
    pub endpoints: Vec<String>,
    pub source: ProxySource,
}

impl ProxyEndpoints {
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Resolves the proxy endpoints to query.
///
/// The first non-empty value wins: `flag`, then `env`, then `go_env`, then `fallback`.
/// `go_env` is only consulted when neither `flag` nor `env` is set.
pub fn resolve_endpoints(
    flag: Option<&str>,
    env: Option<&str>,
    go_env: &dyn GoEnv,
    fallback: &str,
) -> Result<ProxyEndpoints, ProxyError> {
    let (value, source) = select_goproxy(flag, env, go_env, fallback);

    match source {
        ProxySource::Flag | ProxySource::Environment => {
            debug!("Using {}: {}", source, value)
        }
        ProxySource::GoEnv | ProxySource::Default => info!("Using {}: {}", source, value),
    }

    let endpoints = parse_goproxy(&value)?;
    info!("Using GOPROXY: {:?}", endpoints);

    Ok(ProxyEndpoints { endpoints, source })
}

fn select_goproxy(
    flag: Option<&str>,
    env: Option<&str>,
    go_env: &dyn GoEnv,
    fallback: &str,
) -> (String, ProxySource) {
    if let Some(flag) = flag.filter(|v| !v.is_empty()) {
        return (flag.to_string(), ProxySource::Flag);
    }

    if let Some(env) = env.map(str::trim).filter(|v| !v.is_empty()) {
        return (env.to_string(), ProxySource::Environment);
    }

    match go_env.goproxy() {
        Some(value) if !value.trim().is_empty() => (value.trim().to_string(), ProxySource::GoEnv),
        _ => (fallback.to_string(), ProxySource::Default),
    }
}

/// Splits a comma-separated GOPROXY value into endpoints.
///
/// Segments are trimmed; empty and `direct` segments are dropped.
/// Any `off` segment fails the whole value.
pub fn parse_goproxy(value: &str) -> Result<Vec<String>, ProxyError> {
    let mut endpoints = Vec::new();

    for segment in value.split(',').map(str::trim) {
        match segment {
            "" | DIRECT => continue,
            OFF => return Err(ProxyError::Disabled),
            endpoint => endpoints.push(endpoint.to_string()),
        }
    }

    Ok(endpoints)
}
