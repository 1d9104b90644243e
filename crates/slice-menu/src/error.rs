//! # Menu Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error ────────┐                                               │
//! │  serde_json::Error ─────┼──► MenuError (this module) ──► caller         │
//! │  slice_core::CoreError ─┤                                               │
//! │  ConfigError ───────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use slice_core::CoreError;
use thiserror::Error;

/// Errors raised while resolving a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu file could not be read.
    #[error("Failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file is not valid JSON or doesn't match the menu layout.
    #[error("Invalid menu JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The menu parsed but breaks a catalog rule (duplicate id, negative price...).
    #[error("Invalid menu: {0}")]
    Core(#[from] CoreError),

    /// An environment variable held an unusable value.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Convenience type alias for Results with MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
