use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use tracing_appender::rolling::Rotation;

use super::parsers;

/// How often a log file is rolled over
#[derive(Debug, JsonSchema, Clone, Copy, PartialEq)]
#[schemars(rename_all = "lowercase")]
pub enum LogRotationKind {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl FromStr for LogRotationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ("minutely", Self::Minutely),
            ("hourly", Self::Hourly),
            ("daily", Self::Daily),
            ("never", Self::Never),
        ]
        .into_iter()
        .find_map(|(name, kind)| name.eq_ignore_ascii_case(s).then_some(kind))
        .ok_or_else(|| "expected one of minutely, hourly, daily or never".to_string())
    }
}

impl<'de> Deserialize<'de> for LogRotationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parsers::from_str(deserializer)
    }
}

impl From<LogRotationKind> for Rotation {
    fn from(kind: LogRotationKind) -> Self {
        match kind {
            LogRotationKind::Minutely => Rotation::MINUTELY,
            LogRotationKind::Hourly => Rotation::HOURLY,
            LogRotationKind::Daily => Rotation::DAILY,
            LogRotationKind::Never => Rotation::NEVER,
        }
    }
}
