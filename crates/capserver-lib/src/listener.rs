use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Open the TCP listener for the configured host and port.
///
/// Binding is done up front so an occupied port fails startup immediately,
/// before any protocol machinery is built.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the address cannot be bound.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::debug!(%addr, "listener bound");
    Ok(listener)
}
