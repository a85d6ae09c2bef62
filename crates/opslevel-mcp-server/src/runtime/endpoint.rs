//! API URL newtype
//!
//! Wraps the base URL of the OpsLevel application so that a missing value
//! falls back to the public OpsLevel API.

use std::ops::Deref;

use serde::Deserialize;
use url::Url;

/// The base URL of the OpsLevel application
#[derive(Debug, Clone, PartialEq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Unwrap into the inner URL
    pub fn into_inner(self) -> Url {
        self.0
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(defaults::api_url())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Url::deserialize(deserializer).map(Self)
    }
}

impl Deref for ApiUrl {
    type Target = Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod defaults {
    use opslevel_client::DEFAULT_API_URL;
    use url::Url;

    pub(super) fn api_url() -> Url {
        // Checked by [test::default_api_url_parses]
        #[allow(clippy::unwrap_used)]
        Url::parse(DEFAULT_API_URL).unwrap()
    }

}
