use opslevel_client::ClientError;
use rmcp::model::ErrorCode;
use rmcp::service::ServerInitializeError;
use tokio::task::JoinError;

/// An error in server initialization
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Could not create OpsLevel client: {0}")]
    Client(#[from] ClientError),

    #[error("Tool {0} is already registered")]
    DuplicateTool(String),

    #[error("Failed to initialize MCP server")]
    McpInitializeError(#[from] Box<ServerInitializeError<std::io::Error>>),

    #[error("Failed to start server")]
    StartupError(#[from] JoinError),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;

/// The caller supplied arguments that do not match the tool's input schema
pub(crate) fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::new(ErrorCode::INVALID_PARAMS, message.into(), None)
}

/// A failure from the OpsLevel API, passed through with its original message
pub(crate) fn downstream(error: ClientError) -> McpError {
    McpError::new(ErrorCode::INTERNAL_ERROR, error.to_string(), None)
}

pub(crate) fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}
