use reqwest::header::InvalidHeaderValue;

/// Errors returned by the OpsLevel client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid API token: {0}")]
    Token(#[from] InvalidHeaderValue),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Error in response: {0}")]
    Response(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
