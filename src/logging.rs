//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. The TUI owns the terminal, so `play` logs to a file while the other
//! commands log to stderr.
//!
//! # Log Levels
//!
//! - `warn`: swallowed save failures, ignored corrupt state, config fallback
//! - `info`: board generated/restored, word list loaded or saved, wins
//! - `debug`: individual toggles, resets, regenerations, saves

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: Level,
    /// Write to this file instead of stderr
    pub log_file: Option<PathBuf>,
    /// Use ANSI colours (ignored for file output)
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count
    ///
    /// - 0 (no `-v`): warn level
    /// - 1 (`-v`): info level
    /// - 2+ (`-vv`): debug level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the log file path (writes to stderr when None)
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber
///
/// A second call is a no-op, so tests and embedders can call it freely.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        install(config, Mutex::new(file), false);
    } else {
        install(config, io::stderr, config.with_ansi);
    }
    Ok(())
}

fn install<W>(config: &LogConfig, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // External crates stay at warn level to reduce noise
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,bingo_board={level_str},bingo={level_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::DEBUG);
    }

    #[test]
    fn file_logging_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("bingo.log");
        let config = LogConfig::from_verbosity(1).with_log_file(Some(path.clone()));

        init_logging(&config).unwrap();
        assert!(path.exists());
    }
}
