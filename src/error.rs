//! Errors raised by theme collaborators.
//!
//! None of these reach the page: the controller logs them and falls back to
//! its defaults.

use thiserror::Error;

/// Failure reported by a store, signal, or page collaborator.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The origin has no usable key/value store (private mode, sandboxed iframe).
    #[error("preference storage unavailable")]
    StorageUnavailable,
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("document access failed: {0}")]
    Dom(String),
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
