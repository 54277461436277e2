/*
capserver/crates/capserver-lib/src/config.rs

Process configuration for the capability server.

Everything is read once from environment variables at startup and never
mutated afterwards:

- PORT           listener port (default 8000)
- HOST           bind address (default 0.0.0.0)
- MCP_TRANSPORT  `streamable-http` (default) or `stdio`
- MCP_STATELESS  stateless HTTP sessions, true/false (default true)
- MCP_PATH       HTTP endpoint path (default /mcp)

`from_lookup` takes the variable source as a closure so tests can supply
values without touching the real process environment.
*/

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PATH: &str = "/mcp";

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_TRANSPORT: &str = "MCP_TRANSPORT";
pub const ENV_STATELESS: &str = "MCP_STATELESS";
pub const ENV_PATH: &str = "MCP_PATH";

/// Wire mechanism used to carry protocol messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// MCP streamable HTTP (POST/GET/DELETE on a single endpoint).
    #[default]
    StreamableHttp,
    /// Newline-delimited JSON-RPC over stdin/stdout.
    Stdio,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "streamable-http" | "streamable_http" | "http" => Ok(Transport::StreamableHttp),
            "stdio" => Ok(Transport::Stdio),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::StreamableHttp => f.write_str("streamable-http"),
            Transport::Stdio => f.write_str("stdio"),
        }
    }
}

/// Server configuration, read once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub transport: Transport,
    /// When true every HTTP request is handled without a persistent session.
    pub stateless: bool,
    /// Endpoint path the streamable HTTP service is mounted at.
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            transport: Transport::default(),
            stateless: true,
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any variable is set to a value that
    /// cannot be parsed. Unset and empty variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = ServerConfig::default();

        if let Some(raw) = get(ENV_PORT) {
            config.port = raw.parse().map_err(|_| ConfigError::InvalidPort {
                var: ENV_PORT,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = get(ENV_HOST) {
            config.host = raw.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidHost {
                    var: ENV_HOST,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = get(ENV_TRANSPORT) {
            config.transport = raw.parse()?;
        }

        if let Some(raw) = get(ENV_STATELESS) {
            config.stateless = parse_flag(ENV_STATELESS, &raw)?;
        }

        if let Some(raw) = get(ENV_PATH) {
            if !raw.starts_with('/') {
                return Err(ConfigError::InvalidPath {
                    var: ENV_PATH,
                    value: raw,
                });
            }
            config.path = normalize_path(&raw);
        }

        Ok(config)
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}

// "/mcp/" and "/mcp" are the same endpoint; the root stays "/".
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
