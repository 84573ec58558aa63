use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a game configuration is rejected before a game starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 cells, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },

    #[error("initial snake length must be between 1 and {max}, got {length}")]
    InvalidInitialLength { length: usize, max: usize },

    #[error("initial snake segment ({x}, {y}) lies outside the {width}x{height} grid")]
    SnakeOutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error returned by the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
