//! Tools for searching and reading documents
//!
//! Searches always start from the beginning of the result set and request
//! [`DOCUMENTS_PAGE_SIZE`] documents per page.

use std::sync::Arc;

use async_trait::async_trait;
use opslevel_client::{OpsLevelApi, PayloadVariables};
use rmcp::model::{CallToolResult, JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use super::{AccountTool, input_schema, json_result, parse_arguments};
use crate::errors::{McpError, downstream};

pub const DOCUMENTS_TOOL_NAME: &str = "documents";
pub const DOCUMENT_TOOL_NAME: &str = "document";
pub const DOCUMENTS_ON_SERVICE_TOOL_NAME: &str = "documentsOnService";

/// The number of documents requested per page of a search
pub const DOCUMENTS_PAGE_SIZE: u32 = 100;

fn search_variables(search_term: Option<String>) -> PayloadVariables {
    PayloadVariables {
        search_term: search_term.unwrap_or_default(),
        after: String::new(),
        first: DOCUMENTS_PAGE_SIZE,
    }
}

/// Input for the documents tool
#[derive(JsonSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsInput {
    /// To filter documents with.
    #[serde(default)]
    search_term: Option<String>,
}

pub struct Documents {
    api: Arc<dyn OpsLevelApi>,
    pub tool: Tool,
}

impl Documents {
    pub fn new(api: Arc<dyn OpsLevelApi>) -> Self {
        Self {
            api,
            tool: Tool::new(
                DOCUMENTS_TOOL_NAME,
                "Get all the documents for the opslevel account. Documents are filterable by search term. \
                Documents could be things like runbooks, integration documentation, api documentation, \
                readme's, or other forms of documentation.",
                input_schema::<DocumentsInput>(),
            ),
        }
    }
}

#[async_trait]
impl AccountTool for Documents {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let input: DocumentsInput = parse_arguments(arguments)?;
        let documents = self
            .api
            .list_documents(&search_variables(input.search_term))
            .await
            .map_err(downstream)?;
        json_result(&documents)
    }
}

/// Input for the document tool
#[derive(JsonSchema, Deserialize)]
pub struct DocumentInput {
    /// The id of the document to fetch.
    id: String,
}

pub struct Document {
    api: Arc<dyn OpsLevelApi>,
    pub tool: Tool,
}

impl Document {
    pub fn new(api: Arc<dyn OpsLevelApi>) -> Self {
        Self {
            api,
            tool: Tool::new(
                DOCUMENT_TOOL_NAME,
                "Get document contents for the opslevel account, specified by id. \
                Documents could be things like runbooks, integration documentation, api documentation, \
                readme's, or other forms of documentation.",
                input_schema::<DocumentInput>(),
            ),
        }
    }
}

#[async_trait]
impl AccountTool for Document {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let input: DocumentInput = parse_arguments(arguments)?;
        let document = self
            .api
            .get_document(&input.id)
            .await
            .map_err(downstream)?;
        json_result(&document)
    }
}

/// Input for the documents on service tool
#[derive(JsonSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsOnServiceInput {
    /// The id of the service which the documents are on.
    service_id: String,

    /// To filter documents with.
    #[serde(default)]
    search_term: Option<String>,
}

pub struct DocumentsOnService {
    api: Arc<dyn OpsLevelApi>,
    pub tool: Tool,
}

impl DocumentsOnService {
    pub fn new(api: Arc<dyn OpsLevelApi>) -> Self {
        Self {
            api,
            tool: Tool::new(
                DOCUMENTS_ON_SERVICE_TOOL_NAME,
                "Get all documents on a specified service for the opslevel account, specified by service id \
                and filtered by search term. Documents could be things like runbooks, integration documentation, \
                api documentation, readme's, or other forms of documentation.",
                input_schema::<DocumentsOnServiceInput>(),
            ),
        }
    }
}

#[async_trait]
impl AccountTool for DocumentsOnService {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let input: DocumentsOnServiceInput = parse_arguments(arguments)?;
        let documents = self
            .api
            .list_service_documents(&input.service_id, &search_variables(input.search_term))
            .await
            .map_err(downstream)?;
        json_result(&documents)
    }
}
