use std::future::Future;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, Implementation, JsonObject,
    ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use tracing::{debug, warn};

use crate::errors::{McpError, tool_not_found};
use crate::tools::ToolRegistry;

#[derive(Clone)]
pub struct OpsLevelServerHandler {
    registry: Arc<ToolRegistry>,
}

impl OpsLevelServerHandler {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Run the named tool unless the request is cancelled first
    pub(crate) async fn dispatch(
        &self,
        request: CallToolRequestParam,
        cancelled: impl Future<Output = ()>,
    ) -> Result<CallToolResult, McpError> {
        let tool = self
            .registry
            .get(&request.name)
            .ok_or_else(|| tool_not_found(&request.name))?;
        debug!(tool = %request.name, "Calling tool");

        tokio::select! {
            biased;
            _ = cancelled => {
                warn!(tool = %request.name, "Tool call cancelled");
                Err(McpError::new(
                    ErrorCode::INTERNAL_ERROR,
                    "Request cancelled".to_string(),
                    None,
                ))
            }
            result = tool.execute(request.arguments.unwrap_or_else(JsonObject::new)) => result,
        }
    }
}

impl ServerHandler for OpsLevelServerHandler {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request, context.ct.cancelled()).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.registry.tools(),
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "OpsLevel".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
