//! BR Fields MCP Server - Main entry point
//!
//! Serves the Brazilian field formatting/validation engine over the Model Context
//! Protocol (MCP) on stdio.

use anyhow::Result;
use br_fields_mcp_server::client::{AsyncPostalClient, AsyncPostalClientImpl};
use br_fields_mcp_server::services::{AddressLookupService, AddressLookupServiceImpl};
use br_fields_mcp_server::{BrFieldsMcpServer, Config, PostalLookupClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the default filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting BR Fields MCP Server with lookup URL: {}",
        config.postal_lookup_url
    );

    // Initialize directory-service client
    let sync_client = PostalLookupClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncPostalClientImpl::new(sync_client)) as Arc<dyn AsyncPostalClient>;

    let address_lookup = Arc::new(AddressLookupServiceImpl::new(
        client,
        config.max_concurrent_lookups,
    )) as Arc<dyn AddressLookupService>;

    let server = BrFieldsMcpServer::new(address_lookup);

    match config.timeout() {
        Some(timeout) => info!("Lookup timeout: {} seconds", timeout.as_secs()),
        None => info!("Lookup timeout disabled"),
    }

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    let outcome = br_fields_mcp_server::server::run_server(server).await;

    let summary = metrics.summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        found = summary.addresses_found_total,
        not_found = summary.not_found_total,
        "Lookup metrics"
    );
    outcome?;

    info!("BR Fields MCP Server shutdown complete");
    Ok(())
}
