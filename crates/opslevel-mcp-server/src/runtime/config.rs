use std::time::Duration;

use opslevel_client::{ClientConfig, SecretString};
use schemars::JsonSchema;
use serde::Deserialize;
use url::Url;

use super::{endpoint::ApiUrl, logging::Logging};

/// Configuration for the MCP server
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Connection to the OpsLevel API
    pub api: Api,

    /// Logging configuration
    pub logging: Logging,
}

/// OpsLevel API connection options
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Api {
    /// Base URL of the OpsLevel application
    #[schemars(schema_with = "Url::json_schema")]
    pub url: ApiUrl,

    /// The API token used to authenticate
    #[schemars(with = "Option<String>")]
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: ApiUrl::default(),
            token: None,
            timeout: defaults::TIMEOUT_SECONDS,
        }
    }
}

impl Api {
    /// Settings for the OpsLevel client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.url.clone().into_inner(),
            api_token: self
                .token
                .clone()
                .unwrap_or_else(|| SecretString::from("")),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

mod defaults {
    pub(super) const TIMEOUT_SECONDS: u64 = 10;
}
