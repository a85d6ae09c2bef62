//! Runtime utilities
//!
//! This module is only used by the binaries and covers configuration
//! loading and logging setup.

mod config;
mod endpoint;
mod logging;
mod overrides;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
pub use overrides::Overrides;

/// Environment variables for each setting, highest priority first
const ENV_ALIASES: &[(&str, &[&str])] = &[
    (
        "logging:format",
        &["OPSLEVEL_LOG_FORMAT", "OL_LOG_FORMAT", "OL_LOGFORMAT"],
    ),
    (
        "logging:level",
        &["OPSLEVEL_LOG_LEVEL", "OL_LOG_LEVEL", "OL_LOGLEVEL"],
    ),
    (
        "api:url",
        &[
            "OPSLEVEL_API_URL",
            "OL_API_URL",
            "OPSLEVEL_APP_URL",
            "OL_APP_URL",
        ],
    ),
    ("api:timeout", &["OPSLEVEL_API_TIMEOUT"]),
];

/// Environment variables holding the API token, highest priority first
const TOKEN_ENV: &[&str] = &["OPSLEVEL_API_TOKEN", "OL_API_TOKEN", "OL_APITOKEN"];

/// Read the configuration, layering the optional YAML file, the environment
/// and the command line flags in increasing order of priority
#[allow(clippy::result_large_err)]
pub fn read_config(
    yaml_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<Config, figment::Error> {
    let mut figment = Figment::new();
    if let Some(path) = yaml_path {
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(opslevel_env())
        .merge(token_env())
        .merge(overrides.provider())
        .extract()
}

/// Figment provider that maps the OpsLevel environment variable aliases, other
/// than the token's, onto their nested config keys
fn opslevel_env() -> Figment {
    ENV_ALIASES
        .iter()
        .flat_map(|(key, names)| names.iter().rev().map(move |name| (*key, *name)))
        .fold(Figment::new(), |figment, (key, name)| {
            figment.merge(
                Env::raw()
                    .only(&[name])
                    .map(move |_| key.into())
                    .split(":"),
            )
        })
}

/// The API token from the first of its environment variables that is set
///
/// The value is taken verbatim. `Env` would parse tokens such as `0123` or
/// `true` into numbers and booleans.
fn token_env() -> Figment {
    let figment = Figment::new();
    match TOKEN_ENV.iter().find_map(|name| std::env::var(name).ok()) {
        Some(token) => figment.merge(Serialized::default("api.token", token)),
        None => figment,
    }
}
