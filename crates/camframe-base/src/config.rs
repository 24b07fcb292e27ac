use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Where log records go.
#[derive(Clone, Debug, PartialEq)]
pub enum LogSink {
    Stdout,
    /// Date-named files (`YYYY-MM-DD.log`) inside this directory.
    Directory(PathBuf),
}

/// Configuration for the process-wide logger.
#[derive(Clone, Debug)]
pub struct LogConfig {
    sink: LogSink,
    max_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: LogSink::Stdout,
            max_level: default_max_level(),
        }
    }
}

impl LogConfig {
    /// Log to stdout.
    pub fn with_stdout(mut self) -> Self {
        self.sink = LogSink::Stdout;
        self
    }

    /// Log to date-named files inside `dir`.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sink = LogSink::Directory(dir.into());
        self
    }

    /// Override the build-mode default level.
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    // Getters
    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn directory(&self) -> Option<&Path> {
        match &self.sink {
            LogSink::Directory(dir) => Some(dir),
            LogSink::Stdout => None,
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }
}

/// Debug builds log everything down to Debug, release builds stop at Info.
pub fn default_max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
