//! Library entry point for the capability server.
//!
//! Holds everything that does not depend on the protocol framework: the
//! process configuration, the resource registry, the capability functions
//! themselves and the listener binding helper. The `capserver-mcp` binary
//! wires these into an rmcp server handler.
//
// Public modules
pub mod capabilities;
pub mod config;
pub mod error;
pub mod listener;
pub mod registry;

// Re-export primary types for ergonomic use.
pub use config::{ServerConfig, Transport};
pub use error::{ConfigError, RegistryError, ServerError};
pub use listener::bind;
pub use registry::{ResourceEntry, ResourceRegistry};
