//! Catalog MCP Server
//!
//! Exposes the product catalog API as MCP tools over stdio:
//! - Browsing categories and products
//! - Creating and updating them
//! - Deactivating and reactivating them

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::CatalogServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Catalog MCP server");

    let server = CatalogServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
