//! MCP server implementation for Brazilian form fields.
//!
//! This module provides the MCP protocol server that exposes the formatting,
//! validation and postal lookup engine to MCP clients.

pub mod handlers;

pub use handlers::BrFieldsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: BrFieldsMcpServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
