//! Logging config and setup
//!
//! Logs are written to stderr unless a log directory is configured, since
//! stdout carries the MCP protocol.

mod defaults;
mod log_format;
mod log_rotation_kind;
mod parsers;

pub use log_format::LogFormat;
pub use log_rotation_kind::LogRotationKind;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Logging related options
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(
        default = "defaults::log_level",
        deserialize_with = "parsers::from_str"
    )]
    #[schemars(schema_with = "level")]
    pub level: Level,

    /// The format of each log line
    #[serde(default = "defaults::log_format")]
    pub format: LogFormat,

    /// A directory to write log files to instead of stderr
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Log file rotation period to use when a log path is provided
    /// [default: hourly]
    #[serde(default = "defaults::default_rotation")]
    pub rotation: LogRotationKind,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: defaults::log_format(),
            path: None,
            rotation: defaults::default_rotation(),
        }
    }
}

impl Logging {
    pub fn env_filter(&self) -> Result<EnvFilter, anyhow::Error> {
        let mut env_filter = EnvFilter::from_default_env().add_directive(self.level.into());

        if self.level == Level::INFO {
            env_filter = env_filter.add_directive("rmcp=warn".parse()?);
        }
        Ok(env_filter)
    }

    /// Install the global subscriber
    ///
    /// The returned guard must be held for as long as logs should be flushed
    /// to a log file.
    pub fn setup(&self) -> Result<Option<WorkerGuard>, anyhow::Error> {
        let (writer, guard, with_ansi) = self.writer();

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false);
        let layer: Box<dyn Layer<Registry> + Send + Sync> = match self.format {
            LogFormat::Text => layer.with_ansi(with_ansi).boxed(),
            LogFormat::Json => layer.with_ansi(false).json().boxed(),
        };

        tracing_subscriber::registry()
            .with(layer)
            .with(self.env_filter()?)
            .try_init()?;

        Ok(guard)
    }

    fn writer(&self) -> (BoxMakeWriter, Option<WorkerGuard>, bool) {
        let Some(path) = self.path.clone() else {
            return (BoxMakeWriter::new(std::io::stderr), None, true);
        };

        std::fs::create_dir_all(&path)
            .map(|_| path)
            .inspect_err(|e| eprintln!("Failed to create log directory: {e:?}"))
            .ok()
            .and_then(|path| {
                RollingFileAppender::builder()
                    .rotation(self.rotation.into())
                    .filename_prefix("opslevel_mcp")
                    .filename_suffix("log")
                    .build(path)
                    .inspect_err(|e| eprintln!("Failed to create log file: {e:?}"))
                    .ok()
            })
            .map(|appender| {
                let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
                (
                    BoxMakeWriter::new(non_blocking_appender),
                    Some(guard),
                    false,
                )
            })
            .unwrap_or_else(|| {
                eprintln!("Log file setup failed - falling back to stderr");
                (BoxMakeWriter::new(std::io::stderr), None, true)
            })
    }
}

fn level(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    /// Log level
    #[derive(JsonSchema)]
    #[schemars(rename_all = "lowercase")]
    #[allow(dead_code)]
    enum Level {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }

    Level::json_schema(generator)
}
