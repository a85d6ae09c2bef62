use std::sync::Arc;

use bon::bon;
use opslevel_client::OpsLevelApi;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{error, info};

use crate::errors::ServerError;
use crate::server_handler::OpsLevelServerHandler;
use crate::tools::ToolRegistry;

/// An OpsLevel MCP server
pub struct Server {
    api: Arc<dyn OpsLevelApi>,
}

#[bon]
impl Server {
    #[builder]
    pub fn new(api: Arc<dyn OpsLevelApi>) -> Self {
        Self { api }
    }

    /// Serve the OpsLevel tools over stdio until the client disconnects or
    /// the process is asked to stop
    pub async fn start(self) -> Result<(), ServerError> {
        let registry = ToolRegistry::standard(self.api)?;
        let handler = OpsLevelServerHandler::new(registry);

        info!("Starting MCP server in stdio mode");
        let service = handler
            .serve(stdio())
            .await
            .inspect_err(|e| {
                error!("serving error: {:?}", e);
            })
            .map_err(Box::new)?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(ServerError::StartupError)?;
                info!("MCP server stdio connection closed.");
            }
            _ = shutdown_signal() => {
                info!("Received shutdown signal, stopping MCP server");
            }
        }
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
