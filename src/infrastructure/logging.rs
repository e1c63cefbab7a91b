//! Logging system configuration and initialization
//!
//! Console logs go to stderr so stdout carries nothing but the report.
//! An optional non-blocking file writer mirrors them into `log_dir`.
//!
//! `RUST_LOG` overrides the configured level:
//! ```bash
//! RUST_LOG="debug,reqwest=debug,hyper=debug" html-grader -u https://example.com
//! ```

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::Directive,
    fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

pub use crate::infrastructure::config::LoggingConfig;

const LOG_FILE_NAME: &str = "html-grader.log";

/// Dependency targets capped unless TRACE is requested
const QUIET_TARGETS: &[&str] = &[
    "reqwest=warn",
    "hyper=warn",
    "hyper_util=warn",
    "html5ever=warn",
    "selectors=warn",
];

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{level}'"))?;
    if !level.to_lowercase().contains("trace") {
        for directive in QUIET_TARGETS {
            filter = filter.add_directive(directive.parse::<Directive>()?);
        }
    }
    Ok(filter)
}

/// Initialize logging with custom configuration.
///
/// With `file_output` set, the returned guard owns the background file
/// writer: keep it alive until the last event is logged. Dropping it flushes
/// whatever is still buffered.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = build_filter(&config.level)?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_guard = None;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    layers.push(if config.json_format {
        console_layer.json().boxed()
    } else {
        console_layer.boxed()
    });

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir).with_context(|| {
            format!("Failed to create log directory {}", config.log_dir.display())
        })?;
        let (file_writer, guard) = non_blocking(rolling::never(&config.log_dir, LOG_FILE_NAME));
        file_guard = Some(guard);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false);
        layers.push(if config.json_format {
            file_layer.json().boxed()
        } else {
            file_layer.boxed()
        });
    }

    Registry::default()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!(
        level = %config.level,
        json = config.json_format,
        file_output = config.file_output,
        "Logging system initialized"
    );
    Ok(file_guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.file_output);
        assert!(config.log_dir.ends_with("logs"));
    }

    #[test]
    fn test_filter_accepts_levels() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert!(build_filter(level).is_ok(), "level {level}");
        }
    }
}
