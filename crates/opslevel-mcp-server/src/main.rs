use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use opslevel_client::Client;
use opslevel_mcp_server::errors::ServerError;
use opslevel_mcp_server::server::Server;
use runtime::{Overrides, read_config};
use tracing::{debug, info};

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the MCP server
#[derive(clap::Parser)]
#[command(
    version,
    styles = STYLES,
    about = "OpsLevel MCP Server - query your OpsLevel account from an AI agent",
)]
struct Args {
    /// Path to a YAML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = read_config(args.config.as_deref(), &args.overrides)?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = config.logging.setup()?;

    info!(
        "OpsLevel MCP Server v{} // Licensed under MIT",
        std::env!("CARGO_PKG_VERSION")
    );

    let client = Client::new(config.api.client_config()).map_err(ServerError::Client)?;
    debug!(endpoint = %client.endpoint(), "Configured OpsLevel client");

    Ok(Server::builder()
        .api(Arc::new(client))
        .build()
        .start()
        .await?)
}
