//! Logging setup for the folio apps
//!
//! One builder configures every output the apps use:
//!
//! - **Console**: pretty human-readable output, or JSONL (default)
//! - **File**: JSONL written through a non-blocking rolling appender
//! - **Tests**: plain text through the test writer, see [`init_testing`]
//! - **Filtering**: `RUST_LOG` wins over the configured default level
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! // Development mode with pretty human-readable output
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```
//!
//! Keep the returned guard alive for as long as file output should flush.

pub mod config;

pub use config::{ConsoleFormat, FileConfig, LogConfig, RotationStrategy, LOG_DIR_ENV};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Log directory error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create rolling log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Global subscriber already set: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builder for configuring and initializing the logging subscriber
///
/// By default, console output uses JSONL format. Use `LogConfig::development()`
/// for human-readable pretty output during development.
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Initialize the subscriber globally, reporting failures on stderr.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to initialize the subscriber globally
    ///
    /// Returns the file writer guard when file output is enabled.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let console = self.config.console;

        let pretty_console = (console == Some(ConsoleFormat::Pretty))
            .then(|| tracing_subscriber::fmt::layer().with_ansi(true).with_target(true));

        let json_console = (console == Some(ConsoleFormat::Jsonl)).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(true)
        });

        let captured_console = (console == Some(ConsoleFormat::Captured)).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_test_writer()
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(json_console)
            .with(captured_console)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the file writer - truncates for Never rotation, appends for Daily
fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&file_config.directory)?;

    if file_config.rotation == RotationStrategy::Never {
        let file_path = file_config
            .directory
            .join(format!("{}.log", file_config.prefix));
        let file = File::create(&file_path)?;
        return Ok(tracing_appender::non_blocking(file));
    }

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&file_config.prefix)
        .filename_suffix("log");
    if let Some(max_files) = file_config.max_files {
        builder = builder.max_log_files(max_files);
    }
    let appender = builder.build(&file_config.directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Route logs through the test harness. Safe to call from every test.
pub fn init_testing() {
    let _ = FolioSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = FolioSubscriberBuilder::new();
        assert_eq!(builder.config.default_level, "info");
    }

    #[test]
    fn test_default_is_jsonl() {
        let builder = FolioSubscriberBuilder::new();
        assert_eq!(builder.config.console, Some(ConsoleFormat::Jsonl));
    }

    #[test]
    fn test_builder_with_config() {
        let builder = FolioSubscriberBuilder::new().with_config(LogConfig::development());
        assert_eq!(builder.config.default_level, "debug");
        assert_eq!(builder.config.console, Some(ConsoleFormat::Pretty));
    }

    #[test]
    fn test_init_testing_tolerates_repeat_calls() {
        init_testing();
        init_testing();
        tracing::debug!(target: "folio_chat", "captured");
    }

    #[test]
    fn test_never_rotation_creates_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("logs"),
            prefix: "chat".to_string(),
            rotation: RotationStrategy::Never,
            max_files: None,
        };

        let (_writer, guard) = create_file_writer(&config).unwrap();
        drop(guard);

        assert!(dir.path().join("logs").join("chat.log").exists());
    }

    #[test]
    fn test_daily_rotation_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested").join("logs"),
            ..FileConfig::default()
        };

        let (_writer, _guard) = create_file_writer(&config).unwrap();
        assert!(config.directory.is_dir());
    }
}
