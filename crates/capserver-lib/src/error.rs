//! Error types shared by the library modules.
//!
//! Startup problems (bad configuration, occupied port) are fatal and are
//! surfaced to `main` through these types. Request-level failures never
//! reach this module; they are turned into protocol errors by the server
//! handler.

use std::net::SocketAddr;

/// Invalid process configuration read from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': expected a port number between 0 and 65535")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var} value '{value}': {reason}")]
    InvalidHost {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown transport '{0}' (expected 'streamable-http' or 'stdio')")]
    UnknownTransport(String),

    #[error("invalid {var} value '{value}': expected true/false")]
    InvalidFlag { var: &'static str, value: String },

    #[error("invalid {var} value '{value}': path must start with '/'")]
    InvalidPath { var: &'static str, value: String },
}

/// Errors raised while populating the capability registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("capability '{0}' is already registered")]
    Duplicate(String),
}

/// Errors raised while bringing the network listener up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
