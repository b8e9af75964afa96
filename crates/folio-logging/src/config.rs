//! Logging presets for the folio app

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that switches the app to file logging.
pub const LOG_DIR_ENV: &str = "FOLIO_LOG_DIR";

/// Where and how events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub default_level: String,

    /// Console output, if any
    pub console: Option<ConsoleFormat>,

    /// JSONL file output, if any
    pub file: Option<FileConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: Some(ConsoleFormat::Jsonl),
            file: None,
        }
    }
}

impl LogConfig {
    /// Pretty, colored console output at debug level
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: Some(ConsoleFormat::Pretty),
            file: None,
        }
    }

    /// Daily JSONL files under `log_dir`, no console
    pub fn production(log_dir: PathBuf) -> Self {
        Self {
            default_level: "info".to_string(),
            console: None,
            file: Some(FileConfig {
                directory: log_dir,
                ..FileConfig::default()
            }),
        }
    }

    /// Chat diagnostics captured by the test harness, everything else at warn
    pub fn testing() -> Self {
        Self {
            default_level: "warn,folio_chat=debug".to_string(),
            console: Some(ConsoleFormat::Captured),
            file: None,
        }
    }

    /// Pick the preset from [`LOG_DIR_ENV`].
    pub fn from_env() -> Self {
        Self::for_log_dir(std::env::var_os(LOG_DIR_ENV))
    }

    /// Production when a non-empty directory is given, development otherwise.
    pub fn for_log_dir(log_dir: Option<OsString>) -> Self {
        match log_dir {
            Some(dir) if !dir.is_empty() => Self::production(PathBuf::from(dir)),
            _ => Self::development(),
        }
    }
}

/// Console formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// Human-readable with ANSI colors
    Pretty,
    /// One JSON object per line
    Jsonl,
    /// Plain text routed through the test writer
    Captured,
}

/// JSONL file output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub rotation: RotationStrategy,
    /// Rotated files to keep; `None` keeps all
    pub max_files: Option<usize>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "folio".to_string(),
            rotation: RotationStrategy::Daily,
            max_files: Some(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    #[default]
    Daily,
    /// Single file, truncated on start
    Never,
}
