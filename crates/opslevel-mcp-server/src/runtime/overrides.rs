//! Command line overrides
//!
//! Flags take precedence over both the config file and the environment, so
//! each flag that was given is layered on top as its own keyed value.

use figment::Figment;
use figment::providers::Serialized;
use url::Url;

/// Settings that can be given on the command line
#[derive(Default, clap::Args)]
pub struct Overrides {
    /// The log format, TEXT or JSON
    ///
    /// Overrides OPSLEVEL_LOG_FORMAT
    #[arg(long)]
    pub log_format: Option<String>,

    /// The log level, one of ERROR, WARN, INFO or DEBUG
    ///
    /// Overrides OPSLEVEL_LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,

    /// The OpsLevel API URL
    ///
    /// Overrides OPSLEVEL_API_URL
    #[arg(long)]
    pub api_url: Option<Url>,

    /// The OpsLevel API token
    ///
    /// Overrides OPSLEVEL_API_TOKEN
    #[arg(long)]
    pub api_token: Option<String>,

    /// The number of seconds before a request times out
    ///
    /// Overrides OPSLEVEL_API_TIMEOUT
    #[arg(long)]
    pub api_timeout: Option<u64>,
}

impl Overrides {
    /// A provider holding only the flags that were given
    pub(super) fn provider(&self) -> Figment {
        let mut figment = Figment::new();
        if let Some(format) = &self.log_format {
            figment = figment.merge(Serialized::default("logging.format", format));
        }
        if let Some(level) = &self.log_level {
            figment = figment.merge(Serialized::default("logging.level", level));
        }
        if let Some(url) = &self.api_url {
            figment = figment.merge(Serialized::default("api.url", url.as_str()));
        }
        if let Some(token) = &self.api_token {
            figment = figment.merge(Serialized::default("api.token", token));
        }
        if let Some(timeout) = self.api_timeout {
            figment = figment.merge(Serialized::default("api.timeout", timeout));
        }
        figment
    }
}
