// Rust guideline compliant 2026-02-13

mod server;
mod tools;

use std::sync::Arc;

use anyhow::Context;
use capserver::{capabilities, ServerConfig};
use rmcp::{
    model::*, service::RequestContext, tool_handler, ErrorData as McpError, RoleServer,
    ServerHandler,
};
use tracing_subscriber::{fmt, EnvFilter};

use crate::tools::CapabilityServer;

#[tool_handler]
impl ServerHandler for CapabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "capserver".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "capserver: call the `add` tool to sum two integers; read `status://ping` to check liveness.".into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(self.list_resources_impl())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_resource_impl(&request.uri)
    }
}

fn init_tracing() {
    // stderr keeps stdout free for the stdio transport.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("capserver=info,capserver_mcp=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    let resources = capabilities::default_resources().context("failed to register resources")?;
    let server = CapabilityServer::new(Arc::new(resources));

    tracing::info!(
        transport = %config.transport,
        tools = server.tool_router.list_all().len(),
        resources = server.resources().len(),
        "capabilities registered"
    );

    server::run(&config, server).await
}
