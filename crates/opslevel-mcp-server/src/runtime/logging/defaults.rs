use super::{LogFormat, LogRotationKind};
use tracing::Level;

pub(super) const fn log_level() -> Level {
    Level::INFO
}

pub(super) const fn log_format() -> LogFormat {
    LogFormat::Text
}

pub(super) const fn default_rotation() -> LogRotationKind {
    LogRotationKind::Hourly
}
