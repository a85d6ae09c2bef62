use std::time::Duration;

use graphql_client::QueryBody;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::types::{Connection, PageInfo};

/// The OpsLevel API used when no URL is configured
pub const DEFAULT_API_URL: &str = "https://app.opslevel.com";

/// Nodes requested per page of a list query
pub(crate) const PAGE_SIZE: u32 = 100;

/// OpsLevel IDs are base64 encoded `gid://` URIs, so they all share this prefix
const ID_PREFIX: &str = "Z2lkOi8v";

/// Returns true if `identifier` is an OpsLevel ID rather than an alias
pub fn is_id(identifier: &str) -> bool {
    identifier.starts_with(ID_PREFIX)
}

/// Connection settings for the OpsLevel API
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the OpsLevel application, without the `/graphql` suffix
    pub api_url: Url,

    /// The API token sent as a bearer credential
    pub api_token: SecretString,

    /// Timeout applied to every request
    pub timeout: Duration,
}

/// A client for the OpsLevel GraphQL API
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&format!(
            "{}/graphql",
            config.api_url.as_str().trim_end_matches('/')
        ))?;

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_token.expose_secret()))?;
        bearer.set_sensitive(true);

        let headers = HeaderMap::from_iter([
            (AUTHORIZATION, bearer),
            (
                HeaderName::from_static("graphql-visibility"),
                HeaderValue::from_static("public"),
            ),
            (
                USER_AGENT,
                HeaderValue::from_static(concat!("opslevel-mcp/", env!("CARGO_PKG_VERSION"))),
            ),
        ]);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// The full GraphQL endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one GraphQL request and return its `data` object
    pub(crate) async fn query<V>(
        &self,
        operation_name: &'static str,
        query: &'static str,
        variables: V,
    ) -> Result<Value, ClientError>
    where
        V: Serialize,
    {
        let request_body = QueryBody {
            variables,
            query,
            operation_name,
        };

        debug!(operation = operation_name, endpoint = %self.endpoint, "Sending OpsLevel query");
        let response: graphql_client::Response<Value> = self
            .http
            .post(self.endpoint.clone())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            return Err(ClientError::GraphQL(
                errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ));
        }

        response
            .data
            .ok_or_else(|| ClientError::Response("missing data".to_string()))
    }

    /// Fetch a single object found at `pointer` inside the response data
    pub(crate) async fn get<T>(
        &self,
        operation_name: &'static str,
        query: &'static str,
        pointer: &str,
        variables: Value,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let data = self.query(operation_name, query, variables).await?;
        extract(data, pointer)
    }

    /// Fetch every page of the connection found at `pointer`, following cursors
    /// until the API reports there are no more pages
    ///
    /// A page that hands back the cursor it was requested with is an error,
    /// since following it would fetch the same page forever.
    pub(crate) async fn list_all<T>(
        &self,
        operation_name: &'static str,
        query: &'static str,
        pointer: &str,
        mut variables: Map<String, Value>,
    ) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        variables
            .entry("first")
            .or_insert_with(|| Value::from(PAGE_SIZE));
        variables
            .entry("after")
            .or_insert_with(|| Value::String(String::new()));

        let mut nodes = Vec::new();
        loop {
            let data = self.query(operation_name, query, &variables).await?;
            let page: Connection<T> = extract(data, pointer)?;
            nodes.extend(page.nodes);

            match page.page_info {
                PageInfo {
                    has_next_page: true,
                    end_cursor: Some(cursor),
                } => {
                    if variables.get("after").and_then(Value::as_str) == Some(cursor.as_str()) {
                        return Err(ClientError::Response(format!(
                            "{operation_name} returned cursor {cursor} twice"
                        )));
                    }
                    debug!(operation = operation_name, %cursor, "Fetching next page");
                    variables.insert("after".to_string(), Value::String(cursor));
                }
                _ => break,
            }
        }

        Ok(nodes)
    }
}

/// Take the value at `pointer` out of a response and deserialize it
fn extract<T>(mut data: Value, pointer: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    match data.pointer_mut(pointer).map(Value::take) {
        None | Some(Value::Null) => Err(ClientError::Response(format!(
            "nothing found at {pointer}"
        ))),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Variables selecting a resource by `id` or `alias` depending on the shape of
/// the identifier
pub(crate) fn identifier_variables(identifier: &str) -> Map<String, Value> {
    let key = if is_id(identifier) { "id" } else { "alias" };
    Map::from_iter([(key.to_string(), Value::String(identifier.to_string()))])
}
