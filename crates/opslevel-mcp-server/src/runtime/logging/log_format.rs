use schemars::JsonSchema;
use serde::Deserialize;

/// How log lines are rendered
#[derive(Debug, Deserialize, JsonSchema, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// Human readable lines
    #[serde(alias = "text", alias = "TEXT")]
    Text,

    /// One JSON object per line
    #[serde(alias = "json", alias = "JSON")]
    Json,
}
