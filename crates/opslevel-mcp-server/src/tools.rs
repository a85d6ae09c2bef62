//! MCP tools that query an OpsLevel account
//!
//! Every tool is a thin pass-through: its arguments are decoded into a typed
//! input, a single [`OpsLevelApi`] call is made and the result is returned to
//! the caller as JSON text.

mod account;
mod documents;
mod resource_details;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;
use opslevel_client::OpsLevelApi;
use rmcp::model::{CallToolResult, Content, ErrorCode, JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::{McpError, ServerError, invalid_params};

pub use account::{
    ACTIONS_TOOL_NAME, COMPONENTS_TOOL_NAME, Component, DOMAINS_TOOL_NAME, FILTERS_TOOL_NAME,
    INFRASTRUCTURE_TOOL_NAME, Infrastructure, Listing, SYSTEMS_TOOL_NAME, TEAMS_TOOL_NAME,
    USERS_TOOL_NAME,
};
pub use documents::{
    DOCUMENT_TOOL_NAME, DOCUMENTS_ON_SERVICE_TOOL_NAME, DOCUMENTS_PAGE_SIZE, DOCUMENTS_TOOL_NAME,
    Document, Documents, DocumentsOnService,
};
pub use resource_details::{RESOURCE_DETAILS_TOOL_NAME, ResourceDetails};

/// A tool that can be invoked by an MCP client
#[async_trait]
pub trait AccountTool: Send + Sync {
    /// The descriptor advertised to clients
    fn tool(&self) -> &Tool;

    /// Run the tool with the arguments supplied by the client
    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError>;
}

/// The set of tools served, keyed by unique name
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn AccountTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every OpsLevel tool, backed by the given API
    pub fn standard(api: Arc<dyn OpsLevelApi>) -> Result<Self, ServerError> {
        let mut registry = Self::new();
        for listing in Listing::ALL {
            registry.register(listing.into_tool(api.clone()))?;
        }
        registry.register(ResourceDetails::new(api.clone()))?;
        registry.register(Documents::new(api.clone()))?;
        registry.register(Document::new(api.clone()))?;
        registry.register(DocumentsOnService::new(api))?;

        debug!(
            tools = ?registry.tools().iter().map(|tool| tool.name.as_ref()).collect::<Vec<_>>(),
            "Registered tools"
        );
        Ok(registry)
    }

    /// Add a tool, refusing to replace one that is already registered
    pub fn register(&mut self, tool: impl AccountTool + 'static) -> Result<(), ServerError> {
        let name = tool.tool().name.as_ref();
        if self.get(name).is_some() {
            return Err(ServerError::DuplicateTool(name.to_string()));
        }
        self.tools.push(Box::new(tool));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn AccountTool> {
        self.tools
            .iter()
            .find(|tool| tool.tool().name == name)
            .map(Box::as_ref)
    }

    /// Descriptors for every registered tool, in registration order
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|tool| tool.tool().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Generate the JSON schema advertised for a tool's input type
pub(crate) fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => Arc::new(schema),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Decode a tool's arguments into its typed input
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|error| invalid_params(format!("Invalid input: {error}")))
}

/// Serialize a result as the single text content of a tool result
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    serde_json::to_string(value)
        .map(|json| CallToolResult::success(vec![Content::text(json)]))
        .map_err(|error| McpError::new(ErrorCode::INTERNAL_ERROR, error.to_string(), None))
}
