// Rust guideline compliant 2026-02-13

//! Transport wiring: serves a [`CapabilityServer`] over the configured
//! transport until shutdown.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use capserver::{ServerConfig, Transport};
use rmcp::{
    transport::{
        stdio,
        streamable_http_server::{
            session::local::LocalSessionManager, StreamableHttpServerConfig,
            StreamableHttpService,
        },
    },
    ServiceExt,
};
use tokio::net::TcpListener;

use crate::tools::CapabilityServer;

/// Serve `server` over the transport selected in `config`.
///
/// Returns once the transport shuts down cleanly: on Ctrl-C for HTTP, or
/// when the peer closes stdin for stdio.
pub async fn run(config: &ServerConfig, server: CapabilityServer) -> anyhow::Result<()> {
    match config.transport {
        Transport::StreamableHttp => {
            // Bind before building the service so a taken port fails fast.
            let listener = capserver::bind(config).await?;
            serve_http(listener, config, server, shutdown_signal()).await
        }
        Transport::Stdio => serve_stdio(server).await,
    }
}

/// Build the axum router carrying the MCP endpoint.
pub fn router(config: &ServerConfig, server: CapabilityServer) -> Router {
    let http_config = StreamableHttpServerConfig {
        stateful_mode: !config.stateless,
        ..Default::default()
    };
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        http_config,
    );

    // axum refuses to nest at the root.
    if config.path == "/" {
        Router::new().fallback_service(service)
    } else {
        Router::new().nest_service(&config.path, service)
    }
}

/// Serve the streamable HTTP transport on an already bound listener until
/// `shutdown` resolves.
pub async fn serve_http<F>(
    listener: TcpListener,
    config: &ServerConfig,
    server: CapabilityServer,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("listener has no local address")?;
    let app = router(config, server);

    tracing::info!(
        addr = %local_addr,
        path = %config.path,
        stateless = config.stateless,
        "serving MCP over streamable HTTP"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn serve_stdio(server: CapabilityServer) -> anyhow::Result<()> {
    tracing::info!("serving MCP over stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start stdio transport")?;
    service.waiting().await.context("stdio transport failed")?;
    tracing::info!("stdio peer disconnected");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
    }
}
