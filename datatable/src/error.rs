//! Error types

use thiserror::Error;

/// Error loading a [`TableConfig`](crate::TableConfig).
///
/// Table operations themselves never fail; invalid values are clamped.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config: {0}")]
    Parse(#[from] serde_json::Error),
}
